//! Random self-play demonstration collaborator.
//!
//! Stands in for a presentation layer: subscribes to the board's action
//! channel, plays uniformly random legal moves for both sides, completes any
//! notified promotion as a queen, and renders the final position. Primarily
//! used for diagnostics and for exercising the full commit protocol.
//!
//! Usage: `random_playout [plies]` (default 60).

use std::cell::RefCell;
use std::env;
use std::rc::Rc;

use chrono::Local;
use rand::prelude::IndexedRandom;

use quince_chess::chess_board::ChessBoard;
use quince_chess::move_description::{MoveAction, MoveDescription};
use quince_chess::piece_class::PieceClass;
use quince_chess::render_board::render_board;

fn main() {
    let plies: usize = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(60);

    let mut board = ChessBoard::with_standard_arrangement();

    // Committed moves land here; promotions are completed outside the
    // notification (the channel is non-reentrant).
    let committed: Rc<RefCell<Vec<MoveDescription>>> = Rc::new(RefCell::new(Vec::new()));
    {
        let committed = Rc::clone(&committed);
        board.subscribe(move |m| committed.borrow_mut().push(*m));
    }

    let mut rng = rand::rng();
    for ply in 1..=plies {
        let team = board.team_to_move();
        let mut moves = Vec::new();
        for row in 0..8 {
            for col in 0..8 {
                moves.extend(board.legal_moves_at((row, col)));
            }
        }

        let picked = match moves.as_slice().choose(&mut rng) {
            Some(m) => *m,
            None => {
                println!(
                    "[{}] ply {}: no legal moves for {:?}, stopping",
                    Local::now().format("%H:%M:%S%.3f"),
                    ply,
                    team
                );
                break;
            }
        };
        assert!(board.attempt_move(picked.vector.start, picked.vector.stop));

        for m in committed.borrow_mut().drain(..) {
            println!(
                "[{}] ply {} {:?}: {:?} -> {:?} ({:?})",
                Local::now().format("%H:%M:%S%.3f"),
                ply,
                team,
                m.vector.start,
                m.vector.stop,
                m.action
            );
            if let Some(MoveAction::Promote(at)) = m.action {
                board
                    .promote_piece(at, PieceClass::Queen)
                    .expect("notified promotion square must hold a pawn");
            }
        }
    }

    println!("{}", render_board(&board));
}
