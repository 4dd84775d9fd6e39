//! Eligibility and pool partitioning.

use conjuga_core::models::{MasterySnapshot, VerbTense};

/// Eligible pairs split by priority. The two pools are disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pools {
    pub primary: Vec<VerbTense>,
    pub secondary: Vec<VerbTense>,
}

/// Partition `pairs` into primary and secondary pools, preserving input order.
///
/// | flags                                 | mastered | pool      |
/// |---------------------------------------|----------|-----------|
/// | never_show                            | any      | none      |
/// | show_primarily                        | no       | primary   |
/// | show_primarily + always_show          | any      | primary   |
/// | show_primarily                        | yes      | secondary |
/// | (none) or always_show                 | no       | secondary |
/// | always_show                           | yes      | secondary |
/// | (none)                                | yes      | none      |
pub fn build_pools<'a>(
    pairs: impl IntoIterator<Item = &'a VerbTense>,
    snapshot: &MasterySnapshot,
) -> Pools {
    let mut pools = Pools::default();

    for pair in pairs {
        let flags = snapshot.preference(pair);
        if flags.never_show {
            continue;
        }

        let wanted = flags.always_show || !snapshot.is_mastered(pair);
        if flags.show_primarily {
            if wanted {
                pools.primary.push(pair.clone());
            } else {
                // Mastered priority items stay reachable through the secondary pool.
                pools.secondary.push(pair.clone());
            }
        } else if wanted {
            pools.secondary.push(pair.clone());
        }
    }

    pools
}
