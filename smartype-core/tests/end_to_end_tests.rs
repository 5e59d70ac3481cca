//! End-to-end tests for the full rewrite pipeline
//!
//! Each case goes through `transform`, so every pass sees the output of the
//! ones before it.

use smartype_core::{transform, Options};

fn typeset(text: &str) -> String {
    transform(text, &Options::default())
}

#[test]
fn test_composition_in_one_call() {
    assert_eq!(
        typeset("\"Hello,\" she said - \"it's pages 1-5.\""),
        "\u{201C}Hello,\u{201D} she said\u{2014}\u{201C}it\u{2019}s pages 1\u{2013}5.\u{201D}"
    );
}

#[test]
fn test_reference_cases() {
    let test_cases = vec![
        // Apostrophe inside the word, closing quote before `?`
        ("can't multiply\"?", "can\u{2019}t multiply\u{201D}?"),
        // Decimals and versions are not ranges
        ("Qwen1.5-1.8", "Qwen1.5-1.8"),
        ("Pages 1-5", "Pages 1\u{2013}5"),
        ("Jan-Feb 2024", "Jan\u{2013}Feb 2024"),
        // Only the unindented bullet becomes a dash
        (
            "- First level\n - Second level",
            "\u{2014} First level\n - Second level",
        ),
        ("The low was -5 today", "The low was \u{2212}5 today"),
        ("He said \"hi\".", "He said \u{201C}hi.\u{201D}"),
        ("well-known", "well-known"),
    ];

    for (input, expected) in test_cases {
        let output = typeset(input);
        assert_eq!(
            output, expected,
            "Failed for text: '{}'\nGot: {:?}\nExpected: {:?}",
            input, output, expected
        );
    }
}

#[test]
fn test_quoted_sentence_before_attribution() {
    assert_eq!(
        typeset("\"I love dogs.\" - Me"),
        "\u{201C}I love dogs.\u{201D} \u{2014} Me"
    );
}

#[test]
fn test_plain_text_passes_through() {
    for text in [
        "",
        "Nothing to do here.",
        "Line one\nLine two\r\nLine three",
        "Emoji \u{1F600} and accents caf\u{E9}",
        "\u{65E5}\u{672C}\u{8A9E}\u{306E}\u{6587}\u{3002}",
    ] {
        assert_eq!(typeset(text), text);
    }
}

#[test]
fn test_rerunning_on_output_is_safe() {
    for input in [
        "\"Hello,\" she said - \"it's pages 1-5.\"",
        "can't multiply\"?",
        "- First level\n - Second level",
        "Pages 1-5",
    ] {
        let once = typeset(input);
        assert_eq!(typeset(&once), once, "second run changed {input:?}");
    }
}
