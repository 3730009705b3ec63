use duo_gtp::types::Color;
use duo_gtp::{AdapterConfig, GtpEngine};

fn quick_engine() -> GtpEngine {
    GtpEngine::new(AdapterConfig::quick())
}

fn session(input: &str) -> String {
    let mut engine = quick_engine();
    let mut output = Vec::new();
    engine
        .run(input.as_bytes(), &mut output)
        .expect("session failed");
    String::from_utf8(output).expect("non-utf8 output")
}

#[test]
fn scripted_session_produces_framed_replies() {
    let output = session(
        "1 set_game Blokus Duo\n\
         2 clear_board\n\
         3 play b e10,e11,f11,f12,g12\n\
         4 genmove w\n\
         5 showboard\n\
         6 final_score\n\
         7 quit\n",
    );

    let replies: Vec<&str> = output
        .split("\n\n")
        .filter(|r| !r.is_empty())
        .collect();
    assert_eq!(replies.len(), 7);
    for (i, reply) in replies.iter().enumerate() {
        assert!(
            reply.starts_with(&format!("={}", i + 1)),
            "reply {}: {}",
            i + 1,
            reply
        );
    }
    // The board diagram shows the first player's placement.
    assert!(replies[4].contains('X'));
    assert!(replies[4].contains('O'));
}

#[test]
fn error_replies_do_not_end_the_session() {
    let output = session(
        "frobnicate\n\
         play b a1\n\
         play q e10\n\
         set_game Go\n\
         name\n\
         quit\n",
    );

    let replies: Vec<&str> = output
        .split("\n\n")
        .filter(|r| !r.is_empty())
        .collect();
    assert_eq!(replies.len(), 6);
    assert!(replies[0].starts_with("? unknown command"));
    assert!(replies[1].starts_with("? invalid move"));
    assert!(replies[2].starts_with("? invalid argument"));
    assert!(replies[3].starts_with("? invalid argument"));
    assert_eq!(replies[4], "= duo-gtp");
    assert_eq!(replies[5], "=");
}

#[test]
fn end_of_input_terminates_the_loop_without_quit() {
    let output = session("protocol_version\n");
    assert_eq!(output, "= 2\n\n");
}

#[test]
fn genmove_reply_replays_on_a_fresh_engine() {
    let mut engine = quick_engine();
    let reply = engine.process_line("genmove b").expect("no reply");
    assert!(reply.wire.starts_with("= "));
    let text = reply.wire.trim_start_matches("= ").trim_end();

    let mut replay = quick_engine();
    let echoed = replay
        .process_line(&format!("play b {}", text))
        .expect("no reply");
    assert!(echoed.wire.starts_with('='), "replay failed: {}", echoed.wire);
    assert_eq!(
        replay.board().score(Color::First),
        engine.board().score(Color::First)
    );
}

#[test]
fn alternating_game_reaches_a_double_pass() {
    let mut engine = quick_engine();
    let mut consecutive_passes = 0;
    for turn in 0..60 {
        let color = if turn % 2 == 0 { "b" } else { "w" };
        let reply = engine
            .process_line(&format!("genmove {}", color))
            .expect("no reply");
        assert!(reply.wire.starts_with('='), "turn {}: {}", turn, reply.wire);
        let text = reply.wire.trim_start_matches("= ").trim_end();
        if text == "pass" {
            consecutive_passes += 1;
            if consecutive_passes == 2 {
                break;
            }
        } else {
            consecutive_passes = 0;
        }
    }
    assert_eq!(consecutive_passes, 2, "game never finished");

    // Both sides placed something and the score string is consistent.
    let first = engine.board().score(Color::First);
    let second = engine.board().score(Color::Second);
    assert!(first > 0 && second > 0);
    let reply = engine.process_line("final_score").expect("no reply");
    let score = reply.wire.trim_start_matches("= ").trim_end().to_string();
    if first > second {
        assert_eq!(score, format!("B+{}", first - second));
    } else if second > first {
        assert_eq!(score, format!("W+{}", second - first));
    } else {
        assert_eq!(score, "0");
    }
}
