use std::str::FromStr;

/// 다루는 측정 척도 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    SpecificGravity,
    GravityPoints,
    /// 플라토. 브릭스도 같은 값으로 취급한다.
    Plato,
    Srm,
    Lovibond,
}

/// 서로 변환 가능한 척도 묶음.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleFamily {
    /// 당 농도 (SG/GP/°P)
    Gravity,
    /// 맥아 색 (SRM/°L)
    Color,
}

impl Scale {
    pub fn family(&self) -> ScaleFamily {
        match self {
            Scale::SpecificGravity | Scale::GravityPoints | Scale::Plato => ScaleFamily::Gravity,
            Scale::Srm | Scale::Lovibond => ScaleFamily::Color,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Scale::SpecificGravity => "SG",
            Scale::GravityPoints => "GP",
            Scale::Plato => "°P",
            Scale::Srm => "SRM",
            Scale::Lovibond => "°L",
        }
    }
}

impl FromStr for Scale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_lowercase();
        let scale = match t.as_str() {
            "sg" | "gravity" | "specific_gravity" => Scale::SpecificGravity,
            "gp" | "points" | "gravity_points" => Scale::GravityPoints,
            "p" | "°p" | "plato" | "brix" | "bx" => Scale::Plato,
            "srm" => Scale::Srm,
            "l" | "°l" | "lovibond" => Scale::Lovibond,
            _ => return Err(s.trim().to_string()),
        };
        Ok(scale)
    }
}
