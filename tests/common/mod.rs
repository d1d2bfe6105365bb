//! Shared fixture for integration tests: a populated data directory and an
//! in-process server bound to an ephemeral port.

use std::fs;
use std::sync::Arc;

use reqwest::Client;
use rust_xlsxwriter::Workbook;
use serde_json::{json, Value};
use tempfile::TempDir;

use server::config::Config;
use server::routes;
use server::store::match_index::MatchIndex;

/// Token the fixture server accepts.
pub const TOKEN: &str = "test-token";

pub struct TestServer {
    pub base_url: String,
    pub client: Client,
    _data_dir: TempDir,
}

impl TestServer {
    /// Build the fixture data directory, index it and serve it on an
    /// ephemeral port.
    pub async fn spawn() -> Self {
        let data_dir = build_data_dir();

        let config = Config {
            auth_token: TOKEN.to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            data_dir: data_dir.path().to_path_buf(),
        };

        let index = MatchIndex::build(&config.match_dir()).expect("failed to index fixture");
        let app = routes::router(config, Arc::new(index));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: Client::new(),
            _data_dir: data_dir,
        }
    }

    /// GET `path` with the fixture bearer token.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(TOKEN)
            .send()
            .await
            .expect("failed to send request")
    }
}

/// La Liga document: rich on purpose. Root-level away sheet with its own
/// snapshots (different from the match-centre copy), a substitution snapshot,
/// a starter list entry with slot 0, and one player id missing from the name
/// dictionary.
pub fn la_liga_document() -> Value {
    json!({
        "matchId": 1734855,
        "matchCentreData": {
            "timeStamp": "2024-01-08 15:14:11",
            "attendance": 11204,
            "venueName": "Coliseum Alfonso Pérez",
            "referee": { "officialId": 4159, "name": "Jorge Figueroa Vázquez" },
            "weatherCode": "",
            "elapsed": "F",
            "startTime": "2024-01-02T17:00:00",
            "startDate": "2024-01-02T00:00:00",
            "score": "0 : 2",
            "htScore": "0 : 1",
            "ftScore": "0 : 2",
            "etScore": "",
            "statusCode": 6,
            "periodCode": 7,
            "playerIdNameDictionary": {
                "10": "David Soria",
                "11": "Damián Suárez",
                "13": "Borja Mayoral",
                "20": "Stole Dimitrievski",
                "21": "Iván Balliu"
            },
            "events": [
                { "id": 2584728297i64, "eventId": 3, "minute": 0, "typeId": 32 },
                { "id": 2584728299i64, "eventId": 4, "minute": 1, "typeId": 1 }
            ],
            "home": {
                "teamId": 819,
                "name": "Getafe",
                "countryName": "España",
                "managerName": "José Bordalás",
                "averageAge": 28.4,
                "stats": { "possession": 55 },
                "formations": [
                    {
                        "formationId": 8,
                        "formationName": "442",
                        "playerIds": [10, 11, 12],
                        "jerseyNumbers": [1, 2, 14],
                        "formationSlots": [1, 2, 0]
                    },
                    {
                        "formationId": 8,
                        "formationName": "442",
                        "playerIds": [10, 13],
                        "jerseyNumbers": [1, 19],
                        "formationSlots": [1, 9]
                    }
                ]
            },
            "away": {
                "teamId": 64,
                "name": "Rayo Vallecano",
                "countryName": "España",
                "managerName": "Francisco Rodríguez",
                "averageAge": 28.9,
                "stats": { "possession": 45 },
                "formations": [
                    {
                        "formationId": 2,
                        "formationName": "433",
                        "playerIds": [99],
                        "jerseyNumbers": [9],
                        "formationSlots": [1]
                    }
                ]
            }
        },
        "away": {
            "teamId": 64,
            "name": "Rayo Vallecano",
            "countryName": "España",
            "managerName": "Francisco Rodríguez",
            "averageAge": 28.9,
            "formations": [
                {
                    "formationId": 2,
                    "formationName": "433",
                    "playerIds": [20, 21],
                    "jerseyNumbers": [13, 20],
                    "formationSlots": [1, 2]
                }
            ]
        },
        "incidentEvents": [
            { "minute": 57, "teamId": 64, "type": { "displayName": "Goal" } },
            { "minute": 81, "teamId": 819, "type": { "displayName": "Card" } },
            { "minute": 90, "type": { "displayName": "End" } }
        ],
        "matchCentreEventTypeJson": { "shotOnPost": 16, "goal": 17 },
        "formationIdNameMappings": { "2": "433", "8": "442" },
        "maxMinute": 93,
        "minuteExpanded": 96,
        "maxPeriod": 2,
        "expandedMaxMinute": 96,
        "periodEndMinutes": { "1": 47, "2": 93 },
        "timeoutInSeconds": 0
    })
}

/// Premier League document: sparse on purpose. No root-level away sheet, so
/// the away side resolves through the match centre, and the base projection's
/// `away_*` fields stay null.
pub fn premier_league_document() -> Value {
    json!({
        "matchId": 1821391,
        "matchCentreData": {
            "attendance": 60383,
            "venueName": "Emirates Stadium",
            "score": "3 : 1",
            "playerIdNameDictionary": {
                "30": "David Raya",
                "31": "Bukayo Saka"
            },
            "home": {
                "teamId": 13,
                "name": "Arsenal",
                "formations": [
                    {
                        "playerIds": [30, 31],
                        "jerseyNumbers": [22, 7],
                        "formationSlots": [1, 2]
                    }
                ]
            },
            "away": {
                "teamId": 26,
                "name": "Liverpool",
                "formations": [
                    {
                        "playerIds": [40],
                        "jerseyNumbers": [66],
                        "formationSlots": [1]
                    }
                ]
            }
        },
        "maxMinute": 98
    })
}

/// Write the whole fixture data directory: workbook, CSV tables and the
/// per-match document subdirectory.
fn build_data_dir() -> TempDir {
    let dir = TempDir::new().expect("failed to create fixture dir");

    write_tournaments_workbook(&dir);

    fs::write(
        dir.path().join("matches.csv"),
        "match_id,competition,season,date,home_team,away_team,score\n\
         1734855,Spain-La-Liga-2023-2024,2023/2024,2024-01-02,Getafe,Rayo Vallecano,0 : 2\n\
         1700001,Spain-La-Liga-2023-2024,2022/2023,2023-05-20,Getafe,Sevilla,1 : 1\n\
         1821391,England-Premier-League-2023-2024,2023/2024,2024-02-04,Arsenal,Liverpool,3 : 1\n",
    )
    .unwrap();

    fs::write(
        dir.path().join("Opta_qualifiers.csv"),
        "qualifierId;name;description\n\
         1;Long ball;Pass longer than 32 metres, from open play\n\
         2;Cross;A ball played in from wide areas into the box\n",
    )
    .unwrap();

    fs::write(
        dir.path().join("Opta_typeId.csv"),
        "typeId;name;description\n\
         1;Pass;The attempted delivery of the ball from one player to another\n\
         16;Goal;All goals\n",
    )
    .unwrap();

    fs::write(
        dir.path().join("teams.csv"),
        ";matchId;teamId;teamName;countryCode;countryName\n\
         0;1734855;819;Getafe;es;Spain\n\
         1;1734855;64;Rayo Vallecano;es;Spain\n",
    )
    .unwrap();

    let match_dir = dir.path().join("matches");
    fs::create_dir(&match_dir).unwrap();
    fs::write(
        match_dir.join("20240102_Getafe_Rayo Vallecano_1734855.json"),
        serde_json::to_string(&la_liga_document()).unwrap(),
    )
    .unwrap();
    fs::write(
        match_dir.join("20240204_Arsenal_Liverpool_1821391.json"),
        serde_json::to_string(&premier_league_document()).unwrap(),
    )
    .unwrap();

    dir
}

fn write_tournaments_workbook(dir: &TempDir) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let headers = [
        "tournamentId",
        "seasonId",
        "stageId",
        "stageName",
        "regionId",
        "regionName",
        "tournamentName",
        "seasonName",
    ];
    for (col, name) in headers.iter().enumerate() {
        sheet.write(0, col as u16, *name).unwrap();
    }

    sheet.write(1, 0, 4).unwrap();
    sheet.write(1, 1, 9682).unwrap();
    sheet.write(1, 2, 21076).unwrap();
    sheet.write(1, 4, 206).unwrap();
    sheet.write(1, 5, "Spain").unwrap();
    sheet.write(1, 6, "La Liga").unwrap();
    sheet.write(1, 7, "2023/2024").unwrap();

    sheet.write(2, 0, 2).unwrap();
    sheet.write(2, 1, 9618).unwrap();
    sheet.write(2, 2, 21002).unwrap();
    sheet.write(2, 3, "Regular Season").unwrap();
    sheet.write(2, 4, 252).unwrap();
    sheet.write(2, 5, "England").unwrap();
    sheet.write(2, 6, "Premier League").unwrap();
    sheet.write(2, 7, "2023/2024").unwrap();

    workbook
        .save(dir.path().join("tournaments.xlsx"))
        .expect("failed to write fixture workbook");
}
