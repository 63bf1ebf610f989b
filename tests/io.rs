use std::{collections::VecDeque, io};

use batchcalc::io::{read_all_requests, IoHandler};

/// In-memory handler feeding a fixed line sequence and capturing output.
struct ScriptedIo {
    lines:   VecDeque<String>,
    written: Vec<String>,
}

impl ScriptedIo {
    fn new(lines: &[&str]) -> Self {
        Self { lines:   lines.iter().map(ToString::to_string).collect(),
               written: Vec::new(), }
    }
}

impl IoHandler for ScriptedIo {
    fn read_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.written.push(line.to_string());
        Ok(())
    }
}

fn requests_of(lines: &[&str]) -> Option<Vec<Vec<String>>> {
    read_all_requests(&mut ScriptedIo::new(lines))
}

#[test]
fn blank_lines_split_requests() {
    let requests = requests_of(&["x = 1", "y = 2", "", "a = 3", "", "b = 4"]).unwrap();

    assert_eq!(requests,
               vec![vec!["x = 1".to_string(), "y = 2".to_string()],
                    vec!["a = 3".to_string()],
                    vec!["b = 4".to_string()],]);
}

#[test]
fn end_of_input_ends_the_final_request() {
    let requests = requests_of(&["x = 1", "y = x + 1"]).unwrap();

    assert_eq!(requests, vec![vec!["x = 1".to_string(), "y = x + 1".to_string()]]);
}

#[test]
fn consecutive_blank_lines_yield_no_empty_request() {
    let requests = requests_of(&["", "x = 1", "", "", "", "y = 2", ""]).unwrap();

    assert_eq!(requests,
               vec![vec!["x = 1".to_string()], vec!["y = 2".to_string()]]);
}

#[test]
fn lines_are_trimmed() {
    let requests = requests_of(&["  x = 1  ", "\ty = 2", "   ", "z = 3"]).unwrap();

    assert_eq!(requests,
               vec![vec!["x = 1".to_string(), "y = 2".to_string()],
                    vec!["z = 3".to_string()],]);
}

#[test]
fn exit_sentinel_terminates_regardless_of_case() {
    assert_eq!(requests_of(&["x = 1", "exit", "y = 2"]), None);
    assert_eq!(requests_of(&["EXIT"]), None);
    assert_eq!(requests_of(&["x = 1", "", "Exit"]), None);
    assert_eq!(requests_of(&["  exit  "]), None);
}

#[test]
fn empty_input_yields_no_requests() {
    assert_eq!(requests_of(&[]), Some(Vec::new()));
    assert_eq!(requests_of(&["", "   ", ""]), Some(Vec::new()));
}

#[test]
fn handlers_default_to_no_monitoring() {
    let mut io = ScriptedIo::new(&[]);
    assert!(!io.supports_monitoring());
    assert!(!io.has_new_content());
    assert!(io.reset().is_ok());
}
