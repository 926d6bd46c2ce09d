pub mod canned;

use anyhow::Result;

use crate::domain::models::Responder;
use crate::domain::models::ResponderName;

pub type ResponderBox = Box<dyn Responder + Send + Sync>;

pub struct ResponderManager {}

impl ResponderManager {
    pub fn get(name: ResponderName) -> Result<ResponderBox> {
        match name {
            ResponderName::Canned => return Ok(Box::<canned::Canned>::default()),
        }
    }
}
