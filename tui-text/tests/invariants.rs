//! Property tests covering `TextInput` invariants: cursor containment,
//! selection containment, and idempotent clamping survive arbitrary
//! operation sequences.

use proptest::prelude::*;
use tui_core::metrics;
use tui_text::TextInput;

#[derive(Debug, Clone)]
enum Op {
    MoveLeft,
    MoveRight,
    Home,
    End,
    Insert(char),
    DeleteBack,
    DeleteForward,
    SelectAll,
    ClearSelection,
    Select(isize, isize),
    SetCursor(isize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::MoveLeft),
        Just(Op::MoveRight),
        Just(Op::Home),
        Just(Op::End),
        any::<char>().prop_map(Op::Insert),
        Just(Op::DeleteBack),
        Just(Op::DeleteForward),
        Just(Op::SelectAll),
        Just(Op::ClearSelection),
        (-5isize..20, -5isize..20).prop_map(|(a, b)| Op::Select(a, b)),
        (-5isize..20).prop_map(Op::SetCursor),
    ]
}

fn apply(input: TextInput, op: &Op) -> TextInput {
    match *op {
        Op::MoveLeft => input.move_left(),
        Op::MoveRight => input.move_right(),
        Op::Home => input.move_home(),
        Op::End => input.move_end(),
        Op::Insert(c) => input.insert_char(c),
        Op::DeleteBack => input.delete_backward(),
        Op::DeleteForward => input.delete_forward(),
        Op::SelectAll => input.select_all(),
        Op::ClearSelection => input.clear_selection(),
        Op::Select(a, b) => input.with_selection(a, b),
        Op::SetCursor(k) => input.with_cursor(k),
    }
}

fn assert_invariants(input: &TextInput) {
    let max = metrics::cluster_count(input.content());
    assert!(input.cursor() <= max, "cursor {} > max {}", input.cursor(), max);
    if let Some(sel) = input.selection() {
        assert!(sel.start() <= sel.end());
        assert!(sel.end() <= max);
    }
}

proptest! {
    #[test]
    fn invariants_hold_after_any_operation_sequence(ops in prop::collection::vec(op_strategy(), 0..30)) {
        let mut input = TextInput::new(40);
        assert_invariants(&input);
        for op in &ops {
            input = apply(input, op);
            assert_invariants(&input);
        }
    }

    #[test]
    fn cursor_moving_ops_always_drop_selection(a in -5isize..20, b in -5isize..20) {
        let input = TextInput::new(40).with_content("hello world").with_selection(a, b);
        prop_assert_eq!(input.clone().move_left().selection(), None);
        prop_assert_eq!(input.clone().move_right().selection(), None);
        prop_assert_eq!(input.clone().move_home().selection(), None);
        prop_assert_eq!(input.move_end().selection(), None);
    }
}

#[test]
fn immutability_holds_for_every_mutator() {
    let original = TextInput::new(40).with_content("hello world").with_cursor(3);
    let snapshot_content = original.content().to_owned();
    let snapshot_cursor = original.cursor();

    let _ = original.clone().move_left();
    let _ = original.clone().move_right();
    let _ = original.clone().insert_char('x');
    let _ = original.clone().delete_backward();
    let _ = original.clone().delete_forward();
    let _ = original.clone().select_all();
    let _ = original.clone().clear();

    assert_eq!(original.content(), snapshot_content);
    assert_eq!(original.cursor(), snapshot_cursor);
}
