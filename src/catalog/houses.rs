//! # Houses
//!
//! The four fixed houses a quiz-taker can be sorted into, plus the
//! static display metadata the result screen shows for each.
//!
//! Declaration order of [`House`] doubles as the tie-break priority:
//! when two houses end a quiz with equal scores, the one declared
//! earlier wins. See `core::action::resolve_house`.
//!
//! Metadata here is presentation-only. Scoring never reads it.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum House {
    Gryffindor,
    Hufflepuff,
    Ravenclaw,
    Slytherin,
}

impl House {
    /// All houses in tie-break priority order (declaration order).
    pub const ALL: [House; 4] = [
        House::Gryffindor,
        House::Hufflepuff,
        House::Ravenclaw,
        House::Slytherin,
    ];

    /// Static display metadata for this house.
    pub fn info(self) -> &'static HouseInfo {
        match self {
            House::Gryffindor => &GRYFFINDOR,
            House::Hufflepuff => &HUFFLEPUFF,
            House::Ravenclaw => &RAVENCLAW,
            House::Slytherin => &SLYTHERIN,
        }
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

/// Display attributes for one house. Everything the result card renders.
#[derive(Debug)]
pub struct HouseInfo {
    pub name: &'static str,
    pub quote: &'static str,
    pub values: &'static [&'static str],
    pub animal: &'static str,
    pub element: &'static str,
    pub founder: &'static str,
    pub ghost: &'static str,
    pub notable_alumni: &'static [&'static str],
    pub common_room: &'static str,
}

static GRYFFINDOR: HouseInfo = HouseInfo {
    name: "Gryffindor",
    quote: "Their daring, nerve, and chivalry set Gryffindors apart.",
    values: &["Courage", "Bravery", "Nerve", "Chivalry"],
    animal: "Lion",
    element: "Fire",
    founder: "Godric Gryffindor",
    ghost: "Nearly Headless Nick",
    notable_alumni: &[
        "Harry Potter",
        "Hermione Granger",
        "Ron Weasley",
        "Albus Dumbledore",
        "Minerva McGonagall",
    ],
    common_room: "Gryffindor Tower, behind the Fat Lady's portrait",
};

static HUFFLEPUFF: HouseInfo = HouseInfo {
    name: "Hufflepuff",
    quote: "Those patient Hufflepuffs are true and unafraid of toil.",
    values: &["Hard work", "Patience", "Loyalty", "Fair play"],
    animal: "Badger",
    element: "Earth",
    founder: "Helga Hufflepuff",
    ghost: "The Fat Friar",
    notable_alumni: &["Cedric Diggory", "Nymphadora Tonks", "Newt Scamander"],
    common_room: "A cosy basement near the kitchens, behind a stack of barrels",
};

static RAVENCLAW: HouseInfo = HouseInfo {
    name: "Ravenclaw",
    quote: "Wit beyond measure is man's greatest treasure.",
    values: &["Intelligence", "Wit", "Wisdom", "Creativity"],
    animal: "Eagle",
    element: "Air",
    founder: "Rowena Ravenclaw",
    ghost: "The Grey Lady",
    notable_alumni: &[
        "Luna Lovegood",
        "Cho Chang",
        "Filius Flitwick",
        "Garrick Ollivander",
    ],
    common_room: "Ravenclaw Tower, behind a door with a bronze eagle knocker",
};

static SLYTHERIN: HouseInfo = HouseInfo {
    name: "Slytherin",
    quote: "Those cunning folk use any means to achieve their ends.",
    values: &["Ambition", "Cunning", "Leadership", "Resourcefulness"],
    animal: "Serpent",
    element: "Water",
    founder: "Salazar Slytherin",
    ghost: "The Bloody Baron",
    notable_alumni: &["Merlin", "Severus Snape", "Horace Slughorn"],
    common_room: "The dungeons, beneath the Black Lake",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_declaration_order() {
        assert_eq!(House::ALL[0], House::Gryffindor);
        assert_eq!(House::ALL[3], House::Slytherin);
    }

    #[test]
    fn test_every_house_has_metadata() {
        for house in House::ALL {
            let info = house.info();
            assert!(!info.values.is_empty());
            assert!(!info.notable_alumni.is_empty());
            assert_eq!(house.to_string(), info.name);
        }
    }

    #[test]
    fn test_house_serializes_as_plain_string() {
        // Houses key TOML tables in catalog files, so they must
        // round-trip through their variant name.
        let toml_str = "Gryffindor = 3\nSlytherin = -1\n";
        let scores: std::collections::HashMap<House, i32> = toml::from_str(toml_str).unwrap();
        assert_eq!(scores.get(&House::Gryffindor), Some(&3));
        assert_eq!(scores.get(&House::Slytherin), Some(&-1));
    }
}
