use bjtable::ledger::{CHIP_SLOT, format_balance, parse_balance};
use bjtable::{
    Card, ChipLedger, Game, GameOptions, HandScore, LedgerError, Settlement, Suit,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = localStorage, js_name = getItem)]
    fn storage_get(key: &str) -> Result<Option<String>, JsValue>;

    #[wasm_bindgen(catch, js_namespace = localStorage, js_name = setItem)]
    fn storage_set(key: &str, value: &str) -> Result<(), JsValue>;
}

/// Chip ledger backed by the browser's `localStorage`.
struct LocalStorageLedger;

impl ChipLedger for LocalStorageLedger {
    fn load(&mut self) -> Result<Option<usize>, LedgerError> {
        let slot = storage_get(CHIP_SLOT).map_err(|_| LedgerError::Unavailable)?;
        slot.as_deref().map(parse_balance).transpose()
    }

    fn save(&mut self, balance: usize) -> Result<(), LedgerError> {
        storage_set(CHIP_SLOT, &format_balance(balance)).map_err(|_| LedgerError::Unavailable)
    }
}

#[wasm_bindgen]
pub struct WasmGame {
    game: Game<LocalStorageLedger>,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), LocalStorageLedger, seed as u64),
        }
    }

    pub fn place_bet(&mut self, amount: u32) -> Result<(), JsValue> {
        self.game.place_bet_amount(amount as usize).map_err(js_err)
    }

    pub fn clear_bet(&mut self) -> Result<(), JsValue> {
        self.game.clear_bet().map_err(js_err)
    }

    pub fn deal(&mut self) -> Result<(), JsValue> {
        self.game.deal().map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<(), JsValue> {
        self.game.hit().map(|_| ()).map_err(js_err)
    }

    pub fn stand(&mut self) -> Result<(), JsValue> {
        self.game.stand().map(|_| ()).map_err(js_err)
    }

    pub fn clear_hand(&mut self) -> Result<(), JsValue> {
        self.game.clear_hand().map_err(js_err)
    }

    pub fn reset_chips(&mut self) -> Result<(), JsValue> {
        self.game.reset_chips().map_err(js_err)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let game = &self.game;

        let snapshot = Snapshot {
            phase: game.phase().as_str(),
            balance: game.balance() as u32,
            bet: game.bet() as u32,
            player: JsHand {
                cards: game
                    .player_hand()
                    .cards()
                    .iter()
                    .copied()
                    .map(|card| Some(card_to_js(card)))
                    .collect(),
                score: (!game.player_hand().is_empty())
                    .then(|| JsScore::from(game.player_score())),
            },
            dealer: JsHand {
                cards: game
                    .visible_dealer_cards()
                    .into_iter()
                    .map(|card| card.map(card_to_js))
                    .collect(),
                score: game
                    .visible_dealer_score()
                    .filter(|_| !game.dealer_hand().is_empty())
                    .map(JsScore::from),
            },
            round_result: game.round_result().label(),
            settlement: game.settlement().copied().map(JsSettlement::from),
            can_deal: game.can_deal(),
            can_hit: game.can_hit(),
            can_reset_chips: game.can_reset_chips(),
            chips: bjtable::Chip::ALL
                .iter()
                .map(|chip| JsChip {
                    value: chip.value() as u32,
                    enabled: game.can_raise(*chip),
                })
                .collect(),
            cards_remaining: game.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    balance: u32,
    bet: u32,
    player: JsHand,
    dealer: JsHand,
    round_result: &'static str,
    settlement: Option<JsSettlement>,
    can_deal: bool,
    can_hit: bool,
    can_reset_chips: bool,
    chips: Vec<JsChip>,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    pip: &'static str,
    red: bool,
}

#[derive(Serialize)]
struct JsHand {
    /// Face-down cards are `null`.
    cards: Vec<Option<JsCard>>,
    score: Option<JsScore>,
}

#[derive(Serialize)]
struct JsScore {
    score: u8,
    secondary_score: u8,
    bust: bool,
}

impl From<HandScore> for JsScore {
    fn from(score: HandScore) -> Self {
        Self {
            score: score.score,
            secondary_score: score.secondary_score,
            bust: bjtable::is_bust(score),
        }
    }
}

#[derive(Serialize)]
struct JsChip {
    value: u32,
    enabled: bool,
}

#[derive(Serialize)]
struct JsSettlement {
    result: &'static str,
    bet: u32,
    payout: u32,
    net: i32,
    player_value: u8,
    dealer_value: u8,
    player_blackjack: bool,
}

impl From<Settlement> for JsSettlement {
    fn from(settlement: Settlement) -> Self {
        Self {
            result: settlement.result.label(),
            bet: settlement.bet as u32,
            payout: settlement.payout as u32,
            net: settlement.net() as i32,
            player_value: settlement.player_value,
            dealer_value: settlement.dealer_value,
            player_blackjack: settlement.player_blackjack,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        pip: card.pip.symbol(),
        red: card.suit.is_red(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Clubs => "Clubs",
        Suit::Hearts => "Hearts",
        Suit::Spades => "Spades",
        Suit::Diamonds => "Diamonds",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
