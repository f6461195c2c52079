//! Emoji names used by the `name` emoji policy.
//!
//! Variation selectors and zero-width joiners are stripped before lookup, so
//! keys never contain them. Multi-codepoint keys (flags) are listed first.

pub(super) const NAMES: &[(&str, &str)] = &[
    // flags
    ("\u{1F1FA}\u{1F1F8}", "united states"),
    ("\u{1F1EC}\u{1F1E7}", "united kingdom"),
    ("\u{1F1E9}\u{1F1EA}", "germany"),
    ("\u{1F1EB}\u{1F1F7}", "france"),
    ("\u{1F1EF}\u{1F1F5}", "japan"),
    ("\u{1F1EA}\u{1F1FA}", "european union"),
    // faces and people
    ("\u{1F600}", "grinning"),
    ("\u{1F602}", "joy"),
    ("\u{1F60D}", "heart eyes"),
    ("\u{1F60E}", "sunglasses"),
    ("\u{1F622}", "cry"),
    ("\u{1F621}", "angry"),
    ("\u{1F914}", "thinking"),
    ("\u{1F916}", "robot"),
    ("\u{1F47B}", "ghost"),
    ("\u{1F480}", "skull"),
    ("\u{1F4A9}", "poop"),
    ("\u{1F44D}", "thumbs up"),
    ("\u{1F44E}", "thumbs down"),
    ("\u{1F44F}", "clap"),
    ("\u{1F44B}", "waving hand"),
    ("\u{1F64F}", "pray"),
    ("\u{1F4AA}", "muscle"),
    ("\u{1F91D}", "handshake"),
    ("\u{1F440}", "eyes"),
    ("\u{1F9E0}", "brain"),
    // hearts and marks
    ("\u{2764}", "heart"),
    ("\u{1F494}", "broken heart"),
    ("\u{1F525}", "fire"),
    ("\u{2728}", "sparkles"),
    ("\u{2B50}", "star"),
    ("\u{1F31F}", "glowing star"),
    ("\u{26A1}", "zap"),
    ("\u{1F4AF}", "hundred"),
    ("\u{2705}", "check"),
    ("\u{2714}", "check mark"),
    ("\u{274C}", "cross mark"),
    ("\u{26A0}", "warning"),
    ("\u{1F6A8}", "siren"),
    ("\u{1F6D1}", "stop sign"),
    ("\u{267B}", "recycle"),
    // celebration
    ("\u{1F680}", "rocket"),
    ("\u{1F389}", "tada"),
    ("\u{1F38A}", "confetti"),
    ("\u{1F381}", "gift"),
    ("\u{1F382}", "birthday"),
    ("\u{1F3C6}", "trophy"),
    ("\u{1F947}", "gold medal"),
    // work and tools
    ("\u{1F6A7}", "construction"),
    ("\u{1F41B}", "bug"),
    ("\u{1F4A1}", "bulb"),
    ("\u{1F4DD}", "memo"),
    ("\u{1F4DA}", "books"),
    ("\u{1F4D6}", "book"),
    ("\u{1F4E6}", "package"),
    ("\u{1F527}", "wrench"),
    ("\u{1F528}", "hammer"),
    ("\u{1F6E0}", "tools"),
    ("\u{2699}", "gear"),
    ("\u{1F512}", "lock"),
    ("\u{1F513}", "unlock"),
    ("\u{1F511}", "key"),
    ("\u{1F50D}", "search"),
    ("\u{1F4C8}", "chart up"),
    ("\u{1F4C9}", "chart down"),
    ("\u{1F4CA}", "bar chart"),
    ("\u{1F4BB}", "laptop"),
    ("\u{1F5A5}", "desktop"),
    ("\u{1F4F1}", "phone"),
    ("\u{1F4E7}", "email"),
    ("\u{1F4AC}", "speech"),
    ("\u{1F4C5}", "calendar"),
    ("\u{23F0}", "alarm clock"),
    ("\u{231B}", "hourglass"),
    ("\u{1F9EA}", "test tube"),
    ("\u{1F9F9}", "broom"),
    // nature and weather
    ("\u{1F310}", "globe"),
    ("\u{1F30D}", "earth"),
    ("\u{2601}", "cloud"),
    ("\u{2600}", "sun"),
    ("\u{1F319}", "moon"),
    ("\u{1F308}", "rainbow"),
    ("\u{2614}", "umbrella"),
    ("\u{2744}", "snowflake"),
    ("\u{1F4A7}", "droplet"),
    ("\u{1F30A}", "wave"),
    ("\u{1F331}", "seedling"),
    ("\u{1F333}", "tree"),
    ("\u{1F338}", "blossom"),
    ("\u{1F339}", "rose"),
    // animals
    ("\u{1F436}", "dog"),
    ("\u{1F431}", "cat"),
    ("\u{1F98A}", "fox"),
    ("\u{1F43B}", "bear"),
    ("\u{1F427}", "penguin"),
    ("\u{1F40D}", "snake"),
    ("\u{1F980}", "crab"),
    ("\u{1F984}", "unicorn"),
    // food and drink
    ("\u{1F34E}", "apple"),
    ("\u{1F355}", "pizza"),
    ("\u{1F354}", "burger"),
    ("\u{2615}", "coffee"),
    ("\u{1F37A}", "beer"),
    ("\u{1F377}", "wine"),
    // activities and travel
    ("\u{1F3B5}", "music"),
    ("\u{1F3AE}", "video game"),
    ("\u{1F3A8}", "art"),
    ("\u{1F4F7}", "camera"),
    ("\u{1F3AC}", "movie"),
    ("\u{2708}", "airplane"),
    ("\u{1F697}", "car"),
    ("\u{1F6B2}", "bicycle"),
    ("\u{1F3E0}", "house"),
];
