use serde::{Deserialize, Serialize};

use crate::models::Division;

/// Keyword tables driving classification and standout detection.
/// All terms are matched as lowercase substrings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Other sports. Any hit rejects the entry.
    pub exclude: Vec<String>,
    /// Generic football terms. At least one hit is required.
    pub include: Vec<String>,
    /// Checked in listed order; first division with a hit wins.
    pub divisions: Vec<DivisionKeywords>,
    /// Used when no division keyword matches.
    pub fallback: Division,
    pub standout: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionKeywords {
    pub division: Division,
    pub keywords: Vec<String>,
}

fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary {
            exclude: terms(&[
                "cricket",
                "rugby",
                "tennis",
                "golf",
                "snooker",
                "darts",
                "formula 1",
                "formula one",
                "grand prix",
                "motogp",
                "basketball",
                "baseball",
                "american football",
                "hockey",
                "netball",
                "horse racing",
                "heavyweight",
            ]),
            include: terms(&[
                "football",
                "soccer",
                "fc",
                "club",
                "league",
                "cup",
                "match",
                "fixture",
                "goal",
                "striker",
                "midfielder",
                "defender",
                "goalkeeper",
                "manager",
                "head coach",
                "squad",
                "transfer",
                "signing",
                "penalty",
                "kick-off",
                "stadium",
                "relegation",
                "promotion",
            ]),
            divisions: vec![
                DivisionKeywords {
                    division: Division::PremierLeague,
                    keywords: terms(&[
                        "premier league",
                        "arsenal",
                        "aston villa",
                        "bournemouth",
                        "brentford",
                        "brighton",
                        "burnley",
                        "chelsea",
                        "crystal palace",
                        "everton",
                        "fulham",
                        "leeds",
                        "liverpool",
                        "man city",
                        "manchester city",
                        "man utd",
                        "manchester united",
                        "newcastle",
                        "nottingham forest",
                        "sunderland",
                        "tottenham",
                        "spurs",
                        "west ham",
                        "wolves",
                    ]),
                },
                DivisionKeywords {
                    division: Division::Championship,
                    keywords: terms(&[
                        "championship",
                        "birmingham",
                        "blackburn",
                        "bristol city",
                        "charlton",
                        "coventry",
                        "derby county",
                        "hull city",
                        "ipswich",
                        "leicester",
                        "middlesbrough",
                        "millwall",
                        "norwich",
                        "oxford united",
                        "portsmouth",
                        "preston",
                        "qpr",
                        "sheffield united",
                        "sheffield wednesday",
                        "southampton",
                        "stoke city",
                        "swansea",
                        "watford",
                        "west brom",
                        "wrexham",
                    ]),
                },
                DivisionKeywords {
                    division: Division::LeagueOne,
                    keywords: terms(&[
                        "league one",
                        "afc wimbledon",
                        "barnsley",
                        "blackpool",
                        "bolton",
                        "bradford",
                        "burton albion",
                        "cardiff",
                        "doncaster",
                        "exeter",
                        "huddersfield",
                        "lincoln city",
                        "luton",
                        "mansfield",
                        "northampton",
                        "peterborough",
                        "plymouth",
                        "port vale",
                        "reading fc",
                        "rotherham",
                        "stevenage",
                        "stockport",
                        "wigan",
                        "wycombe",
                    ]),
                },
                DivisionKeywords {
                    division: Division::LeagueTwo,
                    keywords: terms(&[
                        "league two",
                        "accrington",
                        "barnet",
                        "barrow afc",
                        "bristol rovers",
                        "bromley",
                        "cambridge united",
                        "cheltenham",
                        "chesterfield",
                        "colchester",
                        "crawley",
                        "crewe",
                        "fleetwood",
                        "gillingham",
                        "grimsby",
                        "harrogate",
                        "mk dons",
                        "newport county",
                        "notts county",
                        "oldham",
                        "salford",
                        "shrewsbury",
                        "swindon",
                        "tranmere",
                        "walsall",
                    ]),
                },
                DivisionKeywords {
                    division: Division::WorldCup,
                    keywords: terms(&[
                        "world cup",
                        "fifa",
                        "qualifier",
                        "nations league",
                        "three lions",
                        "lionesses",
                        "england squad",
                        "international break",
                    ]),
                },
            ],
            fallback: Division::PremierLeague,
            standout: terms(&[
                "shock",
                "upset",
                "stunning",
                "comeback",
                "record",
                "historic",
                "dramatic",
                "derby",
                "thriller",
                "controversy",
                "red card",
                "hat-trick",
                "injury",
                "sacked",
                "appointed",
                "transfer",
            ]),
        }
    }
}
