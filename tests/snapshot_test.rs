mod common;

use clitext::{Alignment, TextWrapper};
use common::boxed;
use insta::assert_snapshot;

const FOX: &str = "The quick brown fox jumps over the lazy dog";

fn render(text: &str, width: usize, alignment: Alignment) -> String {
    let wrapper = TextWrapper::new(width).unwrap();
    boxed(&wrapper.aligned(text, alignment))
}

#[test]
fn test_wrap_sentence_left() {
    assert_snapshot!(render(FOX, 10, Alignment::Left), @r"
    |The quick |
    |brown fox |
    |jumps over|
    |the lazy |
    |dog|
    ");
}

#[test]
fn test_wrap_sentence_center() {
    assert_snapshot!(render(FOX, 10, Alignment::Center), @r"
    |The quick |
    |brown fox |
    |jumps over|
    |the lazy  |
    |   dog    |
    ");
}

#[test]
fn test_wrap_sentence_right() {
    assert_snapshot!(render(FOX, 10, Alignment::Right), @r"
    | The quick|
    | brown fox|
    |jumps over|
    |  the lazy|
    |       dog|
    ");
}

#[test]
fn test_long_word_continues_current_line() {
    assert_snapshot!(render("a supercalifragilistic word", 6, Alignment::Left), @r"
    |a supe|
    |rcalif|
    |ragili|
    |stic |
    |word|
    ");
}

#[test]
fn test_wide_leading_whitespace() {
    assert_snapshot!(render("        indented", 5, Alignment::Left), @r"
    |     |
    |   in|
    |dente|
    |d|
    ");
}

#[test]
fn test_tabs_and_line_breaks() {
    let wrapper = TextWrapper::new(12).unwrap().with_tab_width(2);
    assert_snapshot!(boxed(&wrapper.wrap("one\ttwo\nthree four")), @r"
    |one  two |
    |three four|
    ");
}
