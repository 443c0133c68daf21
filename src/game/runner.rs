//! Match loop: play turns until someone reaches the winning score or the
//! clock runs out, then announce the result.

use std::io::Write;

use crate::core::{DiceSource, GameRng, MatchConfig, MatchState, PlayerId, PlayerMap};
use crate::error::Result;
use crate::rules::{GameResult, StandardTurns, TimeLimitExceeded, TimedTurns, TurnEngine, TurnStatus};

/// Display names of the two seats.
pub const PLAYER_NAMES: [&str; 2] = ["Player 1", "Player 2"];

/// Why a match stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchEnd {
    /// A banked score reached the winning score.
    Won,
    /// The clock ran out before a turn could start.
    TimedOut(TimeLimitExceeded),
    /// Two deterministic seats both passed a full round without rolling.
    Stalled,
}

/// Summary of a finished match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchReport {
    pub result: GameResult,

    pub end: MatchEnd,

    pub final_scores: PlayerMap<u32>,

    /// Completed turns.
    pub turns: usize,
}

/// A match between two seated players.
///
/// ## Example
///
/// ```
/// use rust_pig::core::{MatchState, Player, PlayerId, ScriptedDice};
/// use rust_pig::game::PigMatch;
/// use rust_pig::policy::AutomaticPolicy;
/// use rust_pig::rules::{GameResult, StandardTurns};
///
/// let mut state = MatchState::new(
///     Player::new("Player 1", Box::new(AutomaticPolicy)),
///     Player::new("Player 2", Box::new(AutomaticPolicy)),
/// );
/// state.player_mut(PlayerId::FIRST).bank(74);
///
/// let dice = ScriptedDice::new([6, 6, 6, 6, 2]);
/// let mut game = PigMatch::new(state, StandardTurns::new(dice));
/// let mut out = Vec::new();
/// let report = game.run(&mut out).unwrap();
///
/// assert_eq!(report.result, GameResult::Winner(PlayerId::FIRST));
/// assert_eq!(report.turns, 1);
/// ```
pub struct PigMatch<E> {
    state: MatchState,
    engine: E,
}

impl PigMatch<Box<dyn TurnEngine>> {
    /// Seat players and pick the turn engine described by `config`.
    ///
    /// Human seats prompt on stdout and read stdin.
    pub fn from_config(config: &MatchConfig) -> Self {
        let dice = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        log::info!("dice seed {}", dice.seed());

        let state = MatchState::new(
            config.player1.create(PLAYER_NAMES[0]),
            config.player2.create(PLAYER_NAMES[1]),
        );
        log::info!(
            "{} is {}, {} is {}",
            PLAYER_NAMES[0],
            config.player1,
            PLAYER_NAMES[1],
            config.player2
        );

        Self::new(state, Self::engine_for(config, dice))
    }

    fn engine_for<D: DiceSource + 'static>(config: &MatchConfig, dice: D) -> Box<dyn TurnEngine> {
        let turns = StandardTurns::new(dice);
        if config.timed {
            log::info!("time limit {:?}", config.time_limit);
            Box::new(TimedTurns::new(turns, config.time_limit))
        } else {
            Box::new(turns)
        }
    }
}

impl<E: TurnEngine> PigMatch<E> {
    pub fn new(state: MatchState, engine: E) -> Self {
        Self { state, engine }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Play to the end, writing scores and the result to `out`.
    ///
    /// After each turn: `Scores: <p1> <s1>, <p2> <s2>`, and `<name> wins!`
    /// once a score reaches the goal. When the clock stops the match, the
    /// time limit message is followed by `Game ended by timeout. Winner: <name>`.
    /// When both seats are computers and a round passes with no rolls, the
    /// match ends the same way, as a stalemate.
    pub fn run(&mut self, out: &mut impl Write) -> Result<MatchReport> {
        while !self.state.is_over() {
            match self.engine.play_turn(&mut self.state)? {
                TurnStatus::Completed(_) => {
                    self.write_scores(out)?;
                    if self.state.is_over() {
                        let result = GameResult::from_standings(&self.state);
                        match result {
                            GameResult::Winner(id) => writeln!(out, "{} wins!", self.name(id))?,
                            GameResult::Draw => writeln!(out, "{}", self.draw_line())?,
                        }
                        return Ok(self.report(result, MatchEnd::Won));
                    }
                    if self.state.is_stalled() {
                        writeln!(out, "Neither player rolled for a full round")?;
                        return self.end_early(out, "stalemate", MatchEnd::Stalled);
                    }
                }
                TurnStatus::TimeLimitExceeded(exceeded) => {
                    writeln!(out, "{exceeded}")?;
                    return self.end_early(out, "timeout", MatchEnd::TimedOut(exceeded));
                }
            }
        }

        // Already decided before any turn was played
        Ok(self.report(GameResult::from_standings(&self.state), MatchEnd::Won))
    }

    /// Declare the current leader after a stop short of the winning score.
    fn end_early(&self, out: &mut impl Write, reason: &str, end: MatchEnd) -> Result<MatchReport> {
        let result = GameResult::from_standings(&self.state);
        match result {
            GameResult::Winner(id) => {
                writeln!(out, "Game ended by {}. Winner: {}", reason, self.name(id))?
            }
            GameResult::Draw => writeln!(out, "Game ended by {}. {}", reason, self.draw_line())?,
        }
        Ok(self.report(result, end))
    }

    fn name(&self, id: PlayerId) -> &str {
        self.state.player(id).name()
    }

    fn write_scores(&self, out: &mut impl Write) -> Result<()> {
        let first = self.state.player(PlayerId::FIRST);
        let second = self.state.player(PlayerId::SECOND);
        writeln!(
            out,
            "Scores: {} {}, {} {}",
            first.name(),
            first.score(),
            second.name(),
            second.score()
        )?;
        Ok(())
    }

    fn draw_line(&self) -> String {
        format!(
            "Draw: both players have {}",
            self.state.player(PlayerId::FIRST).score()
        )
    }

    fn report(&self, result: GameResult, end: MatchEnd) -> MatchReport {
        let turns = self.state.history().len();
        match result {
            GameResult::Winner(id) => log::info!("{} won after {} turns", self.name(id), turns),
            GameResult::Draw => log::info!("draw after {} turns", turns),
        }
        MatchReport {
            result,
            end,
            final_scores: self.state.scores(),
            turns,
        }
    }
}
