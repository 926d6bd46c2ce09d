use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Author {
    User,
    Assistant,
}

impl ToString for Author {
    fn to_string(&self) -> String {
        match self {
            Author::User => return Config::get(ConfigKey::Username),
            Author::Assistant => return Config::get(ConfigKey::Model),
        }
    }
}
