use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    /// Shared bearer token every data endpoint requires.
    pub auth_token: String,
    pub host: String,
    pub port: u16,
    /// Directory holding the workbook, the CSV tables and the `matches/`
    /// subdirectory of per-match JSON documents.
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            auth_token: env::var("AUTH_TOKEN")
                .expect("AUTH_TOKEN must be set"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
        }
    }

    /// Tournament/competition workbook.
    pub fn tournaments_file(&self) -> PathBuf {
        self.data_dir.join("tournaments.xlsx")
    }

    /// Match list, one row per match, comma-delimited.
    pub fn matches_csv(&self) -> PathBuf {
        self.data_dir.join("matches.csv")
    }

    /// Directory of per-match JSON documents.
    pub fn match_dir(&self) -> PathBuf {
        self.data_dir.join("matches")
    }

    /// Opta qualifier reference table, semicolon-delimited.
    pub fn qualifiers_csv(&self) -> PathBuf {
        self.data_dir.join("Opta_qualifiers.csv")
    }

    /// Opta event-type reference table, semicolon-delimited.
    pub fn event_types_csv(&self) -> PathBuf {
        self.data_dir.join("Opta_typeId.csv")
    }

    /// Team reference table, semicolon-delimited.
    pub fn teams_csv(&self) -> PathBuf {
        self.data_dir.join("teams.csv")
    }
}
