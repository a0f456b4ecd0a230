use corkboard_core::command::apply;
use corkboard_core::{Board, Column, Command, Task, DONE_COLUMN_ID, TODO_COLUMN_ID};

fn insert_task(board: &mut Board, id: &str, column_id: &str) {
    board.tasks.push(Task {
        id: id.to_string(),
        title: format!("task {id}"),
        description: String::new(),
        column_id: column_id.to_string(),
        created_at: 0,
    });
    board
        .column_mut(column_id)
        .expect("column exists")
        .task_ids
        .push(id.to_string());
}

fn column_order(board: &Board) -> Vec<&str> {
    board.columns.iter().map(|column| column.id.as_str()).collect()
}

fn task_order<'a>(board: &'a Board, column_id: &str) -> Vec<&'a str> {
    board
        .column(column_id)
        .expect("column exists")
        .task_ids
        .iter()
        .map(|id| id.as_str())
        .collect()
}

fn move_task(board: &Board, active_id: &str, over_id: &str) -> Board {
    apply(
        board,
        &Command::MoveTask {
            active_id: active_id.to_string(),
            over_id: over_id.to_string(),
        },
    )
}

fn board_with_columns(ids: &[&str]) -> Board {
    let mut board = Board::with_default_columns();
    board.columns = ids
        .iter()
        .map(|id| Column {
            id: id.to_string(),
            title: id.to_uppercase(),
            task_ids: Vec::new(),
        })
        .collect();
    board
}

#[test]
fn move_column_forward_yields_spec_order() {
    // [X, Y, Z], move X onto Z -> [Y, Z, X]
    let board = board_with_columns(&[TODO_COLUMN_ID, "in-progress", DONE_COLUMN_ID]);
    let next = apply(
        &board,
        &Command::MoveColumn {
            active_id: TODO_COLUMN_ID.to_string(),
            over_id: DONE_COLUMN_ID.to_string(),
        },
    );
    assert_eq!(
        column_order(&next),
        vec!["in-progress", DONE_COLUMN_ID, TODO_COLUMN_ID]
    );
}

#[test]
fn move_column_backward_yields_spec_order() {
    // [X, Y, Z], move Z onto X -> [Z, X, Y]
    let board = board_with_columns(&[TODO_COLUMN_ID, "in-progress", DONE_COLUMN_ID]);
    let next = apply(
        &board,
        &Command::MoveColumn {
            active_id: DONE_COLUMN_ID.to_string(),
            over_id: TODO_COLUMN_ID.to_string(),
        },
    );
    assert_eq!(
        column_order(&next),
        vec![DONE_COLUMN_ID, TODO_COLUMN_ID, "in-progress"]
    );
}

#[test]
fn move_column_with_unknown_id_is_noop() {
    let board = Board::with_default_columns();
    for (active, over) in [("missing", DONE_COLUMN_ID), (TODO_COLUMN_ID, "missing")] {
        let next = apply(
            &board,
            &Command::MoveColumn {
                active_id: active.to_string(),
                over_id: over.to_string(),
            },
        );
        assert_eq!(next, board);
    }
}

#[test]
fn move_column_onto_itself_is_noop() {
    let board = Board::with_default_columns();
    let next = apply(
        &board,
        &Command::MoveColumn {
            active_id: TODO_COLUMN_ID.to_string(),
            over_id: TODO_COLUMN_ID.to_string(),
        },
    );
    assert_eq!(next, board);
}

#[test]
fn same_column_reorder_forward() {
    // [t1, t2, t3], move t1 onto t3 -> [t2, t3, t1]
    let mut board = Board::with_default_columns();
    for id in ["t1", "t2", "t3"] {
        insert_task(&mut board, id, TODO_COLUMN_ID);
    }

    let next = move_task(&board, "t1", "t3");
    assert_eq!(task_order(&next, TODO_COLUMN_ID), vec!["t2", "t3", "t1"]);
    assert_eq!(next.task("t1").unwrap().column_id, TODO_COLUMN_ID);
    next.validate().unwrap();
}

#[test]
fn same_column_reorder_backward() {
    let mut board = Board::with_default_columns();
    for id in ["t1", "t2", "t3"] {
        insert_task(&mut board, id, TODO_COLUMN_ID);
    }

    let next = move_task(&board, "t3", "t1");
    assert_eq!(task_order(&next, TODO_COLUMN_ID), vec!["t3", "t1", "t2"]);
}

#[test]
fn cross_column_move_inserts_before_anchor() {
    // A = [t1, t2], B = [t3]; move t1 onto t3 -> A = [t2], B = [t1, t3]
    let mut board = Board::with_default_columns();
    insert_task(&mut board, "t1", TODO_COLUMN_ID);
    insert_task(&mut board, "t2", TODO_COLUMN_ID);
    insert_task(&mut board, "t3", DONE_COLUMN_ID);

    let next = move_task(&board, "t1", "t3");

    assert_eq!(task_order(&next, TODO_COLUMN_ID), vec!["t2"]);
    assert_eq!(task_order(&next, DONE_COLUMN_ID), vec!["t1", "t3"]);
    assert_eq!(next.task("t1").unwrap().column_id, DONE_COLUMN_ID);
    next.validate().unwrap();
}

#[test]
fn cross_column_move_onto_column_appends_to_end() {
    let mut board = Board::with_default_columns();
    insert_task(&mut board, "t1", TODO_COLUMN_ID);
    insert_task(&mut board, "t2", DONE_COLUMN_ID);
    insert_task(&mut board, "t3", DONE_COLUMN_ID);

    let next = move_task(&board, "t1", DONE_COLUMN_ID);

    assert!(task_order(&next, TODO_COLUMN_ID).is_empty());
    assert_eq!(task_order(&next, DONE_COLUMN_ID), vec!["t2", "t3", "t1"]);
    assert_eq!(next.task("t1").unwrap().column_id, DONE_COLUMN_ID);
    next.validate().unwrap();
}

#[test]
fn move_onto_empty_column_appends_as_only_task() {
    let mut board = Board::with_default_columns();
    insert_task(&mut board, "t1", TODO_COLUMN_ID);

    let next = move_task(&board, "t1", DONE_COLUMN_ID);
    assert_eq!(task_order(&next, DONE_COLUMN_ID), vec!["t1"]);
    next.validate().unwrap();
}

#[test]
fn move_onto_own_column_sends_task_to_end() {
    // Column-as-target routes through the detach-and-append path even for
    // the task's own column.
    let mut board = Board::with_default_columns();
    for id in ["t1", "t2", "t3"] {
        insert_task(&mut board, id, TODO_COLUMN_ID);
    }

    let next = move_task(&board, "t1", TODO_COLUMN_ID);
    assert_eq!(task_order(&next, TODO_COLUMN_ID), vec!["t2", "t3", "t1"]);
    next.validate().unwrap();
}

#[test]
fn move_task_with_unknown_active_is_noop() {
    let mut board = Board::with_default_columns();
    insert_task(&mut board, "t1", TODO_COLUMN_ID);

    let next = move_task(&board, "missing", "t1");
    assert_eq!(next, board);
}

#[test]
fn move_task_with_unresolvable_target_is_noop() {
    // The drag target vanished between gesture and application; the board
    // must stay untouched.
    let mut board = Board::with_default_columns();
    insert_task(&mut board, "t1", TODO_COLUMN_ID);

    let next = move_task(&board, "t1", "missing");
    assert_eq!(next, board);
}

#[test]
fn move_task_onto_itself_is_noop() {
    let mut board = Board::with_default_columns();
    insert_task(&mut board, "t1", TODO_COLUMN_ID);

    let next = move_task(&board, "t1", "t1");
    assert_eq!(next, board);
}
