use anyhow::*;
use lazy_static::lazy_static;
use regex::Regex;
use unidecode::unidecode;

lazy_static! {
    static ref FORBIDDEN_NAME_CHARACTERS_REGEX: Regex = Regex::new("[^\\sa-z0-9-]").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new("\\s+").unwrap();
}

/// Normalizes a player name for storage on the leaderboard.
pub fn sanitize_name(name: &str) -> Result<String> {
    let name = unidecode(name);
    let name: String = FORBIDDEN_NAME_CHARACTERS_REGEX
        .replace_all(&name.to_lowercase(), "")
        .into();
    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("Invalid player name"));
    }
    let name: String = WHITESPACE_REGEX.replace_all(&name, "-").into();
    Ok(name)
}

#[derive(Clone, Debug)]
pub struct Player {
    pub display_name: String,
    pub storage_name: String,
    pub is_admin: bool,
}

impl Player {
    pub fn new(name: &str, is_admin: bool) -> Result<Self> {
        let storage_name = sanitize_name(name)?;
        Ok(Player {
            display_name: name.trim().to_owned(),
            storage_name,
            is_admin,
        })
    }
}
