use crate::classifiers::decision_tree::criterion::SplitCriterion;
use crate::classifiers::decision_tree::node::SplitKind;
use crate::classifiers::decision_tree::threshold::best_threshold;
use crate::core::Schema;

/// The attribute chosen to split a node, with its split shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SplitChoice {
    pub attribute: usize,
    pub kind: SplitKind,
}

/// Picks the best attribute among `candidates` under `criterion`.
///
/// Numeric attributes delegate to the threshold search; categorical ones
/// are scored directly. Selection uses a strict greater-than comparison in
/// candidate order, so the first attribute reaching a given maximum wins
/// ties. Returns `None` when no candidate yields a usable score (for
/// example, every numeric candidate is unparsable for this subset and no
/// categorical candidate exists); the caller must emit a majority-class
/// leaf instead of recursing.
pub(crate) fn select_attribute(
    rows: &[&[String]],
    candidates: &[usize],
    criterion: SplitCriterion,
    schema: &Schema,
) -> Option<SplitChoice> {
    let mut best: Option<(f64, SplitChoice)> = None;

    for &attribute in candidates {
        let scored = if schema.is_numeric(attribute) {
            best_threshold(rows, attribute, criterion).map(|split| {
                (
                    split.score,
                    SplitChoice {
                        attribute,
                        kind: SplitKind::Numeric {
                            threshold: split.threshold,
                        },
                    },
                )
            })
        } else {
            Some((
                criterion.score_categorical(rows, attribute),
                SplitChoice {
                    attribute,
                    kind: SplitKind::Categorical,
                },
            ))
        };

        if let Some((score, choice)) = scored {
            match best {
                Some((max, _)) if score <= max => {}
                _ => best = Some((score, choice)),
            }
        }
    }

    best.map(|(_, choice)| choice)
}
