use super::*;

#[test]
fn hidden_button_leaves_display_to_stylesheet() {
    assert_eq!(reveal_display(false), None);
}

#[test]
fn revealed_button_uses_flex() {
    assert_eq!(reveal_display(true), Some("flex"));
}
