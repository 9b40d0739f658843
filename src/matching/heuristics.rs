use crate::catalog::SearchCandidate;

/// Drops every character that is neither a word character nor whitespace and
/// collapses the remaining whitespace. Letters outside ASCII are word characters.
///
/// `"Rock 'n' Roll (Remastered)"` becomes `"Rock n Roll Remastered"`.
pub fn clean_title(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when `name` contains `target` or `target` contains `name`, ignoring case.
///
/// Empty names never match, otherwise every target would contain them.
pub fn artist_name_matches(name: &str, target: &str) -> bool {
    let name = name.trim().to_lowercase();
    let target = target.trim().to_lowercase();
    if name.is_empty() || target.is_empty() {
        return false;
    }
    name.contains(&target) || target.contains(&name)
}

/// True when any of the candidate's artists matches `target`.
pub fn candidate_matches_artist(candidate: &SearchCandidate, target: &str) -> bool {
    candidate
        .artist_names
        .iter()
        .any(|name| artist_name_matches(name, target))
}

/// First candidate, in provider order, credited to `target`.
pub fn select_by_artist(candidates: Vec<SearchCandidate>, target: &str) -> Option<SearchCandidate> {
    candidates
        .into_iter()
        .find(|candidate| candidate_matches_artist(candidate, target))
}
