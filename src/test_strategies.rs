use proptest::prelude::*;

pub(crate) fn constant_strategy() -> impl Strategy<Value = String> {
    (0u32..=99_999_999).prop_map(|n| n.to_string())
}

pub(crate) fn dice_strategy() -> impl Strategy<Value = String> {
    (
        prop::option::of(0u32..=999),
        prop_oneof![(1u32..=9999).prop_map(|n| n.to_string()), Just("%".to_owned())],
        prop_oneof![Just('d'), Just('D')],
    )
        .prop_map(|(num, sides, marker)| match num {
            Some(num) => format!("{}{}{}", num, marker, sides),
            None => format!("{}{}", marker, sides),
        })
}

pub(crate) fn node_strategy() -> impl Strategy<Value = String> {
    prop_oneof![constant_strategy(), dice_strategy()]
}

pub(crate) fn expression_strategy() -> impl Strategy<Value = String> {
    (
        node_strategy(),
        prop::collection::vec((prop_oneof![Just('+'), Just('-')], node_strategy()), 0..8),
    )
        .prop_map(|(first, rest)| {
            let mut s = first;
            for (op, node) in rest {
                s.push(op);
                s.push_str(&node);
            }
            s
        })
}

/// An expression together with a copy that has whitespace scattered through it.
pub(crate) fn spaced_expression_strategy() -> impl Strategy<Value = (String, String)> {
    expression_strategy()
        .prop_flat_map(|s| {
            let gaps = s.chars().count() + 1;
            let gap = prop_oneof![Just(""), Just(" "), Just("\t"), Just(" \n "), Just("\u{a0}")];
            (Just(s), prop::collection::vec(gap, gaps))
        })
        .prop_map(|(s, gaps)| {
            let mut spaced = String::new();
            for (c, gap) in s.chars().zip(&gaps) {
                spaced.push_str(gap);
                spaced.push(c);
            }
            if let Some(last) = gaps.last() {
                spaced.push_str(last);
            }
            (s, spaced)
        })
}
