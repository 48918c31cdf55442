// src/types/platform.rs
use std::fmt;
use std::str::FromStr;

/// Job boards with a dedicated integration panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    LinkedIn,
    Indeed,
    Glassdoor,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::LinkedIn, Platform::Indeed, Platform::Glassdoor];

    pub fn slug(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "linkedin",
            Platform::Indeed => "indeed",
            Platform::Glassdoor => "glassdoor",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Indeed => "Indeed",
            Platform::Glassdoor => "Glassdoor",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linkedin" => Ok(Platform::LinkedIn),
            "indeed" => Ok(Platform::Indeed),
            "glassdoor" => Ok(Platform::Glassdoor),
            other => anyhow::bail!(
                "Unsupported platform: {}. Use linkedin, indeed or glassdoor",
                other
            ),
        }
    }
}

impl<'a> rocket::request::FromParam<'a> for Platform {
    type Error = anyhow::Error;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        param.parse()
    }
}
