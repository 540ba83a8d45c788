//! Line matcher standing in for the telegram reader during integration tests, plus
//! sample telegrams.
use korri_p1::core::ObisId;
use korri_p1::error::{ObisIdError, ParseError};
use korri_p1::infra::codec::traits::FieldSet;

#[derive(Debug, PartialEq)]
#[allow(dead_code)]
/// Problem found on one telegram line.
pub enum LineError {
    /// The line does not start with a readable OBIS id.
    Id(ObisIdError),
    /// The field refused its value.
    Field(ObisId, ParseError),
    /// The field parsed, but bytes are left on the line.
    Trailing {
        id: ObisId,
        consumed: usize,
        len: usize,
    },
}

#[derive(Debug, Default)]
#[allow(dead_code)]
/// Outcome of feeding a whole telegram.
pub struct Report {
    /// Ids no member of the telegram struct answers to.
    pub unknown: Vec<ObisId>,
    pub errors: Vec<LineError>,
}

/// Split `text` into lines, identify each one and hand its value span to `telegram`.
///
/// The `/` header goes to the identification pseudo id, the `!` trailer (checksum)
/// and empty lines are skipped.
#[allow(dead_code)]
pub fn feed<T: FieldSet>(telegram: &mut T, text: &str) -> Report {
    let mut report = Report::default();

    for line in text.lines().map(str::as_bytes) {
        let (id, span) = match line.first() {
            None | Some(b'!') => continue,
            Some(b'/') => (ObisId::IDENTIFICATION, &line[1..]),
            Some(_) => match ObisId::parse_prefix(line) {
                Ok((id, next)) => (id, &line[next..]),
                Err(err) => {
                    report.errors.push(LineError::Id(err));
                    continue;
                }
            },
        };

        match telegram.parse_field(id, span) {
            None => report.unknown.push(id),
            Some(Err(err)) => report.errors.push(LineError::Field(id, err)),
            Some(Ok(consumed)) if consumed != span.len() => {
                report.errors.push(LineError::Trailing {
                    id,
                    consumed,
                    len: span.len(),
                })
            }
            Some(Ok(_)) => {}
        }
    }
    report
}

#[allow(dead_code)]
pub const WARMTELINK_TELEGRAM: &str = r"/ISk5\2MT382-1000

1-3:0.2.8(50)
0-0:1.0.0(101209113020W)
0-0:96.1.1(4B384547303034303436333935353037)
0-0:96.13.1(3031323334353637)
0-0:96.13.0(303132333435363738393A3B3C3D3E3F)
0-1:24.1.0(003)
0-1:96.1.0(3232323241424344313233343536373839)
0-1:24.4.0(1)
0-1:24.2.1(101209112500W)(12785.123*GJ)
!EF2F
";

#[allow(dead_code)]
pub const DSMR_TELEGRAM: &str = r"/ISk5\2MT382-1000

1-3:0.2.8(50)
0-0:1.0.0(101209113020W)
0-0:96.1.1(4B384547303034303436333935353037)
1-0:1.8.1(123456.789*kWh)
1-0:1.8.2(123456.789*kWh)
1-0:2.8.1(000012.345*kWh)
1-0:2.8.2(000000.000*kWh)
1-0:1.8.0(246913.578*kWh)
1-0:2.8.0(000012.345*kWh)
1-0:3.8.0(000100.250*kvarh)
1-0:4.8.0(000200.500*kvarh)
1-0:3.7.0(00.125*kvar)
1-0:4.7.0(00.000*kvar)
0-0:96.14.0(0002)
1-0:1.7.0(01.193*kW)
1-0:2.7.0(00.000*kW)
0-0:96.3.10(1)
0-0:96.7.21(00004)
0-0:96.7.9(00002)
1-0:99.97.0(2)(0-0:96.7.19)(101208152415W)(0000000240*s)(101208151004W)(0000000301*s)
1-0:32.32.0(00002)
1-0:52.32.0(00001)
1-0:72.32.0(00000)
1-0:32.36.0(00000)
1-0:52.36.0(00003)
1-0:72.36.0(00000)
0-0:96.13.1()
0-0:96.13.0(303132333435363738393A3B3C3D3E3F)
1-0:32.7.0(220.1*V)
1-0:52.7.0(220.2*V)
1-0:72.7.0(220.3*V)
1-0:31.7.0(001*A)
1-0:51.7.0(002*A)
1-0:71.7.0(003*A)
1-0:21.7.0(01.111*kW)
1-0:41.7.0(02.222*kW)
1-0:61.7.0(03.333*kW)
1-0:22.7.0(04.444*kW)
1-0:42.7.0(05.555*kW)
1-0:62.7.0(06.666*kW)
1-0:23.7.0(00.041*kvar)
1-0:43.7.0(00.042*kvar)
1-0:63.7.0(00.043*kvar)
1-0:24.7.0(00.000*kvar)
1-0:44.7.0(00.000*kvar)
1-0:64.7.0(00.001*kvar)
0-1:24.1.0(003)
0-1:96.1.0(3232323241424344313233343536373839)
0-1:24.4.0(1)
0-1:24.2.1(101209112500W)(12785.123*m3)
0-1:24.2.3(101209112500S)(12785.456*m3)
0-1:24.3.0(090212160000)(00)(60)(1)(0-1:24.2.1)(m3)(00000.000)
0-2:24.1.0(004)
0-2:96.1.0(3333333341424344313233343536373839)
0-2:24.4.0(0)
0-2:24.2.1(101209112500W)(00123.456*GJ)
0-3:24.1.0(007)
0-3:96.1.0(3434343441424344313233343536373839)
0-3:24.4.0(1)
0-3:24.2.1(101209112500W)(00042.042*m3)
0-4:24.1.0(003)
0-4:96.1.0(3535353541424344313233343536373839)
0-4:24.4.0(1)
0-4:24.2.1(101209112500W)(00001.500*m3)
!EF2F
";
