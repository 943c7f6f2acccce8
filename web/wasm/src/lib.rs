use gofish::{
    ActorKind, Card, FinalScores, Game, GameOptions, HUMAN_SEAT, Rank, Suit, TurnAction,
    TurnOutcome,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game.restart(seed as u64);
    }

    pub fn ask(&mut self, target: u32, rank: &str) -> Result<JsValue, JsValue> {
        let rank = rank.parse::<Rank>().map_err(js_err)?;
        let outcome = self
            .game
            .human_request(target as usize, rank)
            .map_err(js_err)?;
        to_js_value(&JsOutcome::from(outcome))
    }

    pub fn bot_turn(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.game.bot_turn().map_err(js_err)?;
        to_js_value(&JsOutcome::from(outcome))
    }

    pub fn pass(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.game.pass().map_err(js_err)?;
        to_js_value(&JsOutcome::from(outcome))
    }

    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let players = self
            .game
            .players()
            .iter()
            .enumerate()
            .map(|(seat, player)| JsPlayer {
                seat: seat as u32,
                is_human: seat == HUMAN_SEAT,
                cards: player.hand().cards().iter().copied().map(card_to_js).collect(),
                books: player.book_count() as u32,
            })
            .collect();

        let log = self
            .game
            .log()
            .iter()
            .map(|entry| JsLogEntry {
                actor: actor_to_str(entry.actor),
                message: entry.message.clone(),
            })
            .collect();

        let snapshot = Snapshot {
            players,
            current_turn: self.game.current_turn() as u32,
            cards_remaining: self.game.cards_remaining() as u32,
            log,
            game_over: self.game.is_game_over(),
            final_scores: self.game.final_scores().map(JsFinalScores::from),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    players: Vec<JsPlayer>,
    current_turn: u32,
    cards_remaining: u32,
    log: Vec<JsLogEntry>,
    game_over: bool,
    final_scores: Option<JsFinalScores>,
}

#[derive(Serialize)]
struct JsPlayer {
    seat: u32,
    is_human: bool,
    cards: Vec<JsCard>,
    books: u32,
}

#[derive(Serialize)]
struct JsCard {
    rank: &'static str,
    suit: &'static str,
    red: bool,
}

#[derive(Serialize)]
struct JsLogEntry {
    actor: &'static str,
    message: String,
}

#[derive(Serialize)]
struct JsFinalScores {
    book_counts: Vec<u32>,
    max_books: u32,
    winners: Vec<u32>,
}

impl From<&FinalScores> for JsFinalScores {
    fn from(scores: &FinalScores) -> Self {
        Self {
            book_counts: scores.book_counts.iter().map(|&n| n as u32).collect(),
            max_books: scores.max_books as u32,
            winners: scores.winners.iter().map(|&s| s as u32).collect(),
        }
    }
}

#[derive(Serialize)]
struct JsOutcome {
    seat: u32,
    action: &'static str,
    target: Option<u32>,
    rank: Option<&'static str>,
    received: u32,
    drawn: Option<JsCard>,
    new_books: Vec<&'static str>,
    game_over: bool,
}

impl From<TurnOutcome> for JsOutcome {
    fn from(outcome: TurnOutcome) -> Self {
        let (action, target, rank) = match outcome.action {
            TurnAction::Ask { target, rank, .. } => ("Ask", Some(target as u32), Some(rank.symbol())),
            TurnAction::Pass { .. } => ("Pass", None, None),
        };

        Self {
            seat: outcome.seat as u32,
            action,
            target,
            rank,
            received: outcome.received() as u32,
            drawn: outcome.drawn().map(card_to_js),
            new_books: outcome.new_books.iter().map(|r| r.symbol()).collect(),
            game_over: outcome.game_over,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        rank: card.rank.symbol(),
        suit: suit_to_str(card.suit),
        red: card.suit.is_red(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "Spades",
        Suit::Clubs => "Clubs",
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
    }
}

fn actor_to_str(actor: ActorKind) -> &'static str {
    match actor {
        ActorKind::Human => "human",
        ActorKind::Bot => "bot",
        ActorKind::System => "system",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
