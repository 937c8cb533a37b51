use std::collections::{HashMap, HashSet};

use fell_desert_core::MapOverview;

const MAX_DISAMBIGUATION_OFFSET: usize = 20;
const EMPTY_KEY_CHAR: char = '?';

/// Single-character display labels assigned to the squaddies on a map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SquaddieLabels {
    labels: HashMap<String, String>,
}

impl SquaddieLabels {
    /// Allocates labels for the squaddies visible in the overview, scanning rows top to bottom.
    #[must_use]
    pub fn from_overview(overview: &MapOverview) -> Self {
        Self::allocate(
            overview
                .squaddies()
                .map(|(squaddie, _)| squaddie.out_of_battle_squaddie_id()),
        )
    }

    /// Allocates labels for the provided stable squaddie keys.
    ///
    /// Keys sharing an uppercased first character are told apart by the first
    /// character offset at which every member of the group differs.
    #[must_use]
    pub fn allocate<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut groups: Vec<(String, Vec<&'a str>)> = Vec::new();
        for key in keys {
            let first = first_char(key);
            match groups.iter_mut().find(|(group, _)| *group == first) {
                Some((_, members)) => {
                    if !members.contains(&key) {
                        members.push(key);
                    }
                }
                None => groups.push((first, vec![key])),
            }
        }

        let mut labels = HashMap::new();
        let mut taken = HashSet::new();
        for (first, members) in &groups {
            if let [only] = members.as_slice() {
                let _ = taken.insert(first.clone());
                let _ = labels.insert((*only).to_owned(), first.clone());
            }
        }

        for (first, members) in groups.iter().filter(|(_, members)| members.len() > 1) {
            let assigned = disambiguate(members, &taken).unwrap_or_else(|| {
                (0..members.len())
                    .map(|index| format!("{first}{index}"))
                    .collect()
            });
            for (member, label) in members.iter().zip(assigned) {
                let _ = taken.insert(label.clone());
                let _ = labels.insert((*member).to_owned(), label);
            }
        }

        Self { labels }
    }

    /// Label assigned to the squaddie key, if it was part of the allocation.
    #[must_use]
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Number of labelled squaddies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Reports whether no squaddie received a label.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

fn disambiguate(members: &[&str], taken: &HashSet<String>) -> Option<Vec<String>> {
    (1..MAX_DISAMBIGUATION_OFFSET).find_map(|offset| {
        let candidates: Vec<String> = members
            .iter()
            .map(|key| match key.chars().nth(offset) {
                Some(character) => character.to_uppercase().collect(),
                None => first_char(key),
            })
            .collect();
        let distinct: HashSet<&String> = candidates.iter().collect();
        let clear = candidates.iter().all(|candidate| !taken.contains(candidate));
        (distinct.len() == candidates.len() && clear).then_some(candidates)
    })
}

fn first_char(key: &str) -> String {
    key.chars()
        .next()
        .unwrap_or(EMPTY_KEY_CHAR)
        .to_uppercase()
        .collect()
}
