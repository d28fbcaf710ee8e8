use crate::domain::EntryUid;

/// Index after `current`, wrapping to the first entry. `len` must be non-zero.
pub fn next_index(current: usize, len: usize) -> usize {
    (current + 1) % len
}

/// Uid that follows `current` in `uids`, wrapping around.
pub fn next_uid<'a>(uids: &'a [EntryUid], current: &str) -> Option<&'a EntryUid> {
    let position = uids.iter().position(|uid| uid == current)?;
    uids.get(next_index(position, uids.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uids(n: usize) -> Vec<EntryUid> {
        (0..n).map(|i| i.to_string()).collect()
    }

    #[test]
    fn advances_by_one() {
        let uids = uids(4);
        for k in 0..3 {
            assert_eq!(next_uid(&uids, &uids[k]), Some(&uids[k + 1]));
        }
    }

    #[test]
    fn wraps_from_last_to_first() {
        let uids = uids(4);
        assert_eq!(next_uid(&uids, "3"), Some(&uids[0]));
        assert_eq!(next_index(3, 4), 0);
    }

    #[test]
    fn single_entry_returns_itself() {
        let uids = uids(1);
        assert_eq!(next_uid(&uids, "0"), Some(&uids[0]));
    }

    #[test]
    fn unknown_uid_has_no_successor() {
        assert_eq!(next_uid(&uids(2), "missing"), None);
    }
}
