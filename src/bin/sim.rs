use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    FleetSpec, GameSession, HuntTargeting, Phase, Side, Targeting, DEFAULT_BOARD_SIZE,
};
use serde_json::json;

/// Plays one game with both sides automated and prints a JSON summary.
fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [board_size]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => DEFAULT_BOARD_SIZE,
    };

    let mut session = GameSession::new_game(
        size,
        FleetSpec::standard(),
        SmallRng::seed_from_u64(seed),
    )?;
    session.auto_place_fleet()?;

    // the player's shots come from the same hunting strategy
    let mut player_ai = HuntTargeting::new();
    let mut player_rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut opponent_turns = 0usize;
    let winner = loop {
        match session.phase() {
            Phase::PlayerTurn => {
                let (r, c) = player_ai.choose_shot(
                    session.player_view(),
                    session.ships_afloat(Side::Opponent),
                    &mut player_rng,
                )?;
                session.fire_at_opponent(r, c)?;
            }
            Phase::OpponentTurn => {
                session.process_opponent_turn()?;
                opponent_turns += 1;
            }
            Phase::GameOver { winner } => break winner,
            Phase::Placement => anyhow::bail!("fleet was not placed"),
        }
    };

    let result = json!({
        "board_size": size,
        "player": {
            "shots": session.player_shots(),
            "ships_afloat": session.ships_afloat(Side::Player).len(),
        },
        "opponent": {
            "shots": session.opponent_shots(),
            "ships_afloat": session.ships_afloat(Side::Opponent).len(),
            "turns": opponent_turns,
        },
        "winner": match winner {
            Side::Player => "player",
            Side::Opponent => "opponent",
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
