//! Tests for the PostScript tokenizer.

use pstext_core::pslexer::{Delimiter, PsLexer, PsToken};

/// Raw PostScript content exercising every token kind
const TESTDATA: &str = r#"%!PS
begin end
 "  @ #
/a/BCD /Some_Name /foo#5f#xbaa
0 +1 -2 .5 1.234
(abc) () (abc ( def ) ghi)
(def\040\0\0404ghi) (bach\\slask) (foo\nbaa)
(this % is not a comment.)
(foo
baa)
(foo\
baa)
<> <20> < 40 4020 >
<abcd00
12345>
func/a/b{(c)do*}def
[ 1 (z) ! ]
<< /foo (bar) >>
"#;

/// Expected tokens from TESTDATA (position, token)
fn expected_tokens() -> Vec<(usize, PsToken<'static>)> {
    use PsToken::{Bare, Name};
    let s = |v: &str| PsToken::String(v.to_string());
    let d = PsToken::Delimiter;
    vec![
        (5, Bare("begin")),
        (11, Bare("end")),
        (16, Bare("\"")),
        (19, Bare("@")),
        (21, Bare("#")),
        (23, Name("a")),
        (25, Name("BCD")),
        (30, Name("Some_Name")),
        (41, Name("foo#5f#xbaa")), // names are not decoded
        (54, Bare("0")),
        (56, Bare("+1")),
        (59, Bare("-2")),
        (62, Bare(".5")),
        (65, Bare("1.234")),
        (71, s("abc")),
        (77, s("")),
        (80, s("abc ( def ) ghi")),
        (98, s("def \u{0} 4ghi")), // \040=space, \0=NUL, \040=space, 4=4
        (118, s("bach\\slask")),
        (132, s("foo\nbaa")),
        (143, s("this % is not a comment.")),
        (170, s("foo\nbaa")), // literal newline in string
        (180, s("foobaa")),   // \<newline> = line continuation
        (191, s("")),         // <>
        (194, s(" ")),        // <20>
        (199, s("@@ ")),      // <404020> with spaces
        (211, s("\u{ab}\u{cd}\u{0}\u{12}\u{34}\u{50}")), // odd digit count padded
        (226, Bare("func")),
        (230, Name("a")),
        (232, Name("b")),
        (234, d(Delimiter::ProcOpen)),
        (235, s("c")),
        (238, Bare("do*")),
        (241, d(Delimiter::ProcClose)),
        (242, Bare("def")),
        (246, d(Delimiter::ArrayOpen)),
        (248, Bare("1")),
        (250, s("z")),
        (254, Bare("!")),
        (256, d(Delimiter::ArrayClose)),
        (258, d(Delimiter::DictOpen)),
        (261, Name("foo")),
        (266, s("bar")),
        (272, d(Delimiter::DictClose)),
    ]
}

#[test]
fn test_tokenization() {
    let tokens: Vec<(usize, PsToken<'_>)> = PsLexer::new(TESTDATA).collect();
    let expected = expected_tokens();

    assert_eq!(
        tokens.len(),
        expected.len(),
        "Token count mismatch: got {}, expected {}",
        tokens.len(),
        expected.len()
    );

    for (i, ((pos, token), (exp_pos, exp_token))) in tokens.iter().zip(expected.iter()).enumerate()
    {
        assert_eq!(
            *pos, *exp_pos,
            "Token {} position mismatch: got {}, expected {}",
            i, pos, exp_pos
        );
        assert_eq!(
            token, exp_token,
            "Token {} value mismatch at pos {}: got {:?}, expected {:?}",
            i, pos, token, exp_token
        );
    }
}

#[test]
fn test_lexer_consumes_everything() {
    let mut lexer = PsLexer::new(TESTDATA);
    while lexer.next_token().is_some() {}
    assert_eq!(lexer.tell(), TESTDATA.len());
}

#[test]
fn test_stray_delimiters() {
    let tokens: Vec<_> = PsLexer::new(") > <").map(|(_, t)| t).collect();
    assert_eq!(
        tokens,
        vec![
            PsToken::Delimiter(Delimiter::Stray(')')),
            PsToken::Delimiter(Delimiter::Stray('>')),
            PsToken::Delimiter(Delimiter::Stray('<')),
        ]
    );
}
