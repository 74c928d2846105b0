//! 完整对局测试
//!
//! 宿主负责循环：每回合调用一次 `next_move`，再把走法落到棋盘上。

use std::time::Duration;

use anyhow::{bail, Result};
use player_ai::{AiConfig, AlphaBetaPlayer};
use protocol::testing::{FlipBoard, TicTacToe};
use protocol::{Board, Color, Move, Player};

const TURN_BUDGET: Duration = Duration::from_secs(5);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// 交替走棋直到分出胜负，返回 (胜者, 跳过次数)
fn play_out<B, P>(board: &mut B, players: &mut [P; 2], max_turns: usize) -> Result<(Color, usize)>
where
    B: Board,
    P: Player<B>,
{
    let mut skips = 0;
    let mut turn = 0;
    loop {
        let player = &mut players[turn % 2];
        if let Some(winner) = board.winner(player.color()) {
            return Ok((winner, skips));
        }
        if turn >= max_turns {
            bail!("game did not finish within {} turns", max_turns);
        }

        let legal = board.moves_for(player.color());
        match player.next_move(board, TURN_BUDGET) {
            Move::Play(action) => {
                if !legal.contains(&action) {
                    bail!("{} played illegal move {:?}", player.name(), action);
                }
                board.do_move(&action);
            }
            Move::Skip(color) => {
                if color != player.color() || !legal.is_empty() {
                    bail!("{} skipped with moves available", player.name());
                }
                skips += 1;
            }
        }
        turn += 1;
    }
}

#[test]
fn test_tic_tac_toe_game() -> Result<()> {
    init_tracing();
    let mut board = TicTacToe::new();
    let mut players = [
        AlphaBetaPlayer::new("first", Color::First, AiConfig::default().with_seed(1))?,
        AlphaBetaPlayer::new("second", Color::Second, AiConfig::default().with_seed(2))?,
    ];

    let (winner, skips) = play_out(&mut board, &mut players, 9)?;

    assert_eq!(skips, 0);
    assert_eq!(board.winner(Color::First), Some(winner));
    Ok(())
}

#[test]
fn test_flip_game_fills_board() -> Result<()> {
    init_tracing();
    let mut board = FlipBoard::new(4)?;
    let mut players = [
        AlphaBetaPlayer::with_defaults(Color::First)?,
        AlphaBetaPlayer::with_defaults(Color::Second)?,
    ];

    let (winner, _) = play_out(&mut board, &mut players, 16)?;

    assert!(board.moves_for(Color::First).is_empty());
    assert_eq!(board.pending_moves(), 16);
    let first = board.count(Color::First);
    let second = board.count(Color::Second);
    let expected = match first.cmp(&second) {
        std::cmp::Ordering::Greater => Color::First,
        std::cmp::Ordering::Less => Color::Second,
        std::cmp::Ordering::Equal => Color::Empty,
    };
    assert_eq!(winner, expected);
    Ok(())
}

#[test]
fn test_player_finishes_winning_line() -> Result<()> {
    let mut board = TicTacToe::from_grid("O.O/.X./X.X")?;
    let mut player = AlphaBetaPlayer::with_defaults(Color::First)?;

    let mv = player.next_move(&mut board, TURN_BUDGET);

    // (1, 2) 直接连成底行
    let Some(action) = mv.into_action() else {
        bail!("expected a placement");
    };
    board.do_move(&action);
    assert_eq!(board.winner(Color::Second), Some(Color::First));
    Ok(())
}
