// Shared session export fixture for the integration tests

#![allow(dead_code)]

use conference_typeset::parse::read_sessions;
use conference_typeset::Session;

/// Contribution slot groups in the fixture header
pub const SLOTS: usize = 4;

/// (title, presenter, start, end); an empty presenter leaves the slot unassigned
pub type Talk<'a> = (&'a str, &'a str, &'a str, &'a str);

pub fn header() -> String {
    let mut columns = vec![
        "session_short".to_string(),
        "session_title".to_string(),
        "session_room".to_string(),
        "session_start".to_string(),
        "session_end".to_string(),
        "chair1_name".to_string(),
    ];
    for n in 1..=SLOTS {
        for field in [
            "title",
            "authors",
            "organisations",
            "presenting_author",
            "abstract",
            "start",
            "end",
        ] {
            columns.push(format!("p{}_{}", n, field));
        }
    }
    columns.join(";")
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// One export row on 2024-09-`day`
pub fn session_row(id: &str, room: &str, day: u32, start: &str, end: &str, talks: &[Talk]) -> String {
    let at = |time: &str| format!("2024-09-{} {}", day, time);
    let mut fields = vec![
        quoted(id),
        quoted(&format!("Session {}", id)),
        quoted(room),
        quoted(&at(start)),
        quoted(&at(end)),
        quoted("Chair, Carla"),
    ];
    for n in 0..SLOTS {
        match talks.get(n) {
            Some((title, presenter, start, end)) if !presenter.is_empty() => {
                let marked = format!("{} (1)", presenter);
                fields.push(quoted(title));
                fields.push(quoted(&marked));
                fields.push(quoted("1: Test University"));
                fields.push(quoted(&marked));
                fields.push(quoted(&format!("<p>Abstract of <i>{}</i></p>", title)));
                fields.push(quoted(&at(start)));
                fields.push(quoted(&at(end)));
            }
            _ => fields.extend(std::iter::repeat(String::new()).take(7)),
        }
    }
    fields.join(";")
}

/// Two conference days covering every session category
pub fn conference_export() -> String {
    let rows = [
        session_row("PML", "Audimax", 16, "08:30", "09:30", &[("Turbulence revisited", "Famous, Fiona", "08:30", "09:30")]),
        session_row(
            "A01_01",
            "HS 1",
            16,
            "09:45",
            "10:45",
            &[
                ("Fluids & Solids", "Doe, Jane", "09:45", "10:00"),
                ("Second talk", "Roe, Rick", "10:00", "10:15"),
                ("Late talk", "Poe, Paula", "10:30", "10:45"),
            ],
        ),
        session_row(
            "A02_01",
            "HS 2",
            16,
            "09:45",
            "10:45",
            &[
                ("Double talk", "Long, Lena", "09:45", "10:15"),
                ("Third talk", "Short, Sam", "10:15", "10:30"),
                ("Fourth talk", "Last, Lou", "10:30", "10:45"),
            ],
        ),
        session_row(
            "MS1_01",
            "HS 3",
            16,
            "09:45",
            "10:45",
            &[
                ("Mini one", "Mini, Max", "09:45", "10:07"),
                ("Mini two", "Micro, Mia", "10:07", "10:29"),
            ],
        ),
        session_row("MS10_01", "HS 4", 16, "09:45", "10:45", &[]),
        session_row("RvML", "Audimax", 16, "11:00", "11:45", &[("Secret prize talk", "Winner, Wanda", "11:00", "11:22")]),
        session_row("Poster1", "Foyer", 16, "16:00", "18:00", &[("Poster one", "Post, Pia", "16:00", "18:00")]),
        session_row("A01_02", "HS 1", 17, "09:00", "09:30", &[("Tuesday talk", "Doe, Jane", "09:00", "09:15")]),
        session_row(
            "DFG-PP 2256",
            "HS 1/2",
            17,
            "09:00",
            "09:30",
            &[
                ("Priority talk", "Grant, Gina", "09:00", "09:15"),
                ("Priority two", "Fund, Fred", "09:15", "09:30"),
            ],
        ),
    ];

    let mut text = header();
    for row in rows {
        text.push('\n');
        text.push_str(&row);
    }
    text.push('\n');
    text
}

pub fn conference_sessions() -> Vec<Session> {
    read_sessions(conference_export().as_bytes()).expect("fixture export should parse")
}

pub fn info_field(title: &str, presenter: &str) -> String {
    format!("\\footnotesize{{\\bfseries {}}}\\newline\\presenter{{{}}}", title, presenter)
}
