use rand::seq::IndexedRandom;
use rand::Rng;

/// Canned one-liners for a rounded score. Buckets above 10 share the top pool.
pub fn comment_pool(bucket: u8) -> &'static [&'static str] {
    match bucket {
        0 => &[
            "This is not acceptable in any form.",
            "Negative marks if we had them. What a waste of time!",
            "Start over. Seriously.",
        ],
        1 => &[
            "A first-generation code model would have done better.",
            "There is a lot of room for improvement here.",
            "A complete fail; a genuinely disappointing piece of work.",
        ],
        2 => &[
            "Was this written at two in the morning?",
            "Only marginally better than one point, and still dreadful.",
            "Two points, which says enough about the effort.",
        ],
        3 => &[
            "Reading this code gives me a headache.",
            "Barely over the line, nowhere near satisfying.",
            "Most of it needs to be redone.",
        ],
        4 => &[
            "A few bright spots, but not good enough overall.",
            "Still weak; not much here worth praising.",
        ],
        5 => &[
            "Please, become a real coder.",
            "Half-way there; progress, but far from good.",
            "Middle of the road and never beyond expectations.",
        ],
        6 => &[
            "Sixty percent: passing is passing, right?",
            "It runs, so who needs a nicer bike?",
            "Somewhat patched together; could be more polished.",
            "Has potential, needs more polish and tuning.",
        ],
        7 => &[
            "A developer without dreams is just a salted fish.",
            "Decent and worth a look, with room to grow.",
            "Good overall with a few small flaws.",
        ],
        8 => &[
            "Even the models could learn something from this.",
            "Now that is what professional looks like.",
        ],
        9 => &[
            "Written more elegantly than most keynotes.",
            "Want to learn? I'll teach you.",
            "Elegant. Truly elegant.",
        ],
        _ => &[
            "Accurate, flawless and deeply impressive!",
            "A model example that unquestionably earns full marks.",
            "The language's creator would call this elegant.",
        ],
    }
}

/// Pick a line from the pool for `bucket`.
pub fn pick_comment<R: Rng + ?Sized>(bucket: u8, rng: &mut R) -> &'static str {
    comment_pool(bucket).choose(rng).copied().unwrap_or_default()
}
