//! Parsing pass names

use std::str::FromStr;

use crate::api::Error;
use crate::domain::pipeline::Pass;

impl FromStr for Pass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Pass::ALL
            .into_iter()
            .find(|pass| pass.name() == wanted)
            .ok_or_else(|| Error::UnknownPass(s.to_string()))
    }
}

/// Parse a list of pass names
pub fn parse_passes<S: AsRef<str>>(names: &[S]) -> Result<Vec<Pass>, Error> {
    names.iter().map(|name| name.as_ref().parse()).collect()
}
