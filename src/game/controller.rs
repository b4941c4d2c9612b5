//! The controller: the only gate between fields/strategies and game state.
//!
//! Fields and strategies never hold a `Player` or mutate the board; every
//! query and every economic mutation funnels through here. Mutations are
//! check-then-act: the caller verifies affordability first, transfers are
//! plain integer arithmetic with no rollback path.

use crate::board::{Field, StableId};
use crate::core::Player;
use crate::game::events::GameEvent;
use crate::game::session::GameSession;
use std::sync::Arc;

/// Borrowed gateway over a running session, scoped to the acting player.
pub struct Controller<'g> {
    game: &'g mut GameSession,
}

impl<'g> Controller<'g> {
    pub(crate) fn new(game: &'g mut GameSession) -> Self {
        Self { game }
    }

    fn acting(&self) -> &Player {
        &self.game.players[self.game.current]
    }

    fn find_player(&self, name: &str) -> Option<&Player> {
        self.game.players.iter().find(|p| p.name == name)
    }

    // === Queries ===

    /// Name of the acting player.
    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.acting().name
    }

    /// Balance of the acting player.
    #[must_use]
    pub fn player_money(&self) -> i64 {
        self.acting().money
    }

    /// Board index the acting player stands on.
    #[must_use]
    pub fn current_field_index(&self) -> usize {
        self.acting().position
    }

    /// Round currently being played, starting at 1.
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.game.round
    }

    /// Whether the acting player can pay `amount` outright.
    #[must_use]
    pub fn has_enough_money(&self, amount: i64) -> bool {
        self.player_money() >= amount
    }

    /// Owner of the field the acting player stands on.
    #[must_use]
    pub fn current_field_owner(&self) -> Option<&str> {
        self.game.board.field(self.current_field_index()).owner()
    }

    /// Whether the acting player owns the field they stand on.
    #[must_use]
    pub fn is_owned_by_player(&self) -> bool {
        self.current_field_owner() == Some(self.player_name())
    }

    /// Whether some other player owns the field the acting player stands on.
    #[must_use]
    pub fn is_owned_by_another_player(&self) -> bool {
        self.current_field_owner().is_some() && !self.is_owned_by_player()
    }

    /// The rival owner of the current field, if there is one.
    #[must_use]
    pub fn rival_owner(&self) -> Option<String> {
        if self.is_owned_by_another_player() {
            self.current_field_owner().map(str::to_owned)
        } else {
            None
        }
    }

    /// Number of horses in `stable`.
    #[must_use]
    pub fn horses_in_stable(&self, stable: StableId) -> usize {
        self.game.board.horses_in_stable(stable)
    }

    /// Number of horses in `stable` the named player owns.
    #[must_use]
    pub fn horses_in_stable_owned_by(&self, stable: StableId, name: &str) -> usize {
        self.game.board.horses_in_stable_owned_by(stable, name)
    }

    /// Whether the named player owns every horse of `stable`.
    #[must_use]
    pub fn is_whole_stable_owned_by(&self, stable: StableId, name: &str) -> bool {
        self.horses_in_stable_owned_by(stable, name) == self.horses_in_stable(stable)
    }

    /// Number of trainers the named player owns.
    #[must_use]
    pub fn trainers_owned_by(&self, name: &str) -> usize {
        self.game.board.trainers_owned_by(name)
    }

    /// Whether the named player is currently suspended.
    ///
    /// # Panics
    ///
    /// Panics if no active player carries that name. Ownership is released
    /// before a player leaves the game, so a dangling name is a broken
    /// invariant, not a tolerable absence.
    #[must_use]
    pub fn is_player_suspended(&self, name: &str) -> bool {
        self.find_player(name)
            .unwrap_or_else(|| panic!("no active player named {name:?}"))
            .suspended
    }

    // === Decision prompts ===

    /// Ask the acting player's strategy whether to buy the current field.
    #[must_use]
    pub fn offer_property(&self) -> bool {
        let strategy = Arc::clone(&self.acting().strategy);
        let property = self.game.board.field(self.current_field_index()).clone();
        strategy.wants_to_buy(self, &property)
    }

    /// Ask the acting player's strategy whether to buy a race upgrade for
    /// the horse they stand on.
    ///
    /// # Panics
    ///
    /// Panics if the current field is not a horse.
    #[must_use]
    pub fn offer_race(&self) -> bool {
        let strategy = Arc::clone(&self.acting().strategy);
        let horse = match self.game.board.field(self.current_field_index()) {
            Field::Horse(horse) => horse.clone(),
            other => panic!("race offered on {}, which is not a horse", other.name()),
        };
        strategy.wants_new_race(self, &horse)
    }

    // === Mutations ===

    /// Buy the current field for the acting player at its listed price.
    ///
    /// The caller has already checked the field is unowned and affordable.
    ///
    /// # Panics
    ///
    /// Panics if the current field is not purchasable.
    pub fn buy_property(&mut self) {
        let index = self.current_field_index();
        let field = self.game.board.field(index);
        let property = field.name().to_owned();
        let Some(price) = field.price() else {
            panic!("{property} is not for sale");
        };
        let buyer = self.player_name().to_owned();

        self.transfer_to_bank(price);
        self.game.board.field_mut(index).set_owner(Some(buyer.clone()));
        self.game.emit(GameEvent::PropertyBought {
            player: buyer,
            property,
            price,
        });
    }

    /// Buy one race upgrade for the horse the acting player stands on.
    ///
    /// The caller has already checked full-stable ownership and
    /// affordability.
    ///
    /// # Panics
    ///
    /// Panics if the current field is not a horse.
    pub fn buy_new_race(&mut self) {
        let index = self.current_field_index();
        let (horse, price) = match self.game.board.field(index) {
            Field::Horse(h) => (h.name.clone(), h.race_price),
            other => panic!("cannot buy a race on {}", other.name()),
        };
        let buyer = self.player_name().to_owned();

        self.transfer_to_bank(price);
        if let Field::Horse(h) = self.game.board.field_mut(index) {
            h.add_race();
        }
        self.game.emit(GameEvent::RaceBought {
            player: buyer,
            horse,
            price,
        });
    }

    /// Transfer `amount` from the acting player to the named owner.
    ///
    /// # Panics
    ///
    /// Panics if no active player carries the receiver's name.
    pub fn pay_admission(&mut self, receiver: &str, amount: i64, purpose: &str) {
        let payer = self.game.current;
        let receiver_index = self
            .game
            .players
            .iter()
            .position(|p| p.name == receiver)
            .unwrap_or_else(|| panic!("admission receiver {receiver:?} is not active"));

        self.game.players[payer].money -= amount;
        self.game.players[receiver_index].money += amount;

        let player = self.game.players[payer].name.clone();
        self.game.emit(GameEvent::AdmissionPaid {
            player,
            owner: receiver.to_owned(),
            amount,
            purpose: purpose.to_owned(),
        });
    }

    /// Transfer `amount` from the acting player to the bank.
    pub fn pay_fee_to_bank(&mut self, amount: i64, purpose: &str) {
        self.transfer_to_bank(amount);
        let player = self.player_name().to_owned();
        self.game.emit(GameEvent::FeePaid {
            player,
            amount,
            purpose: purpose.to_owned(),
        });
    }

    /// Put the acting player into suspension.
    pub fn suspend_player(&mut self) {
        self.game.players[self.game.current].suspended = true;
        let player = self.player_name().to_owned();
        self.game.emit(GameEvent::Suspended { player });
    }

    /// Move the acting player forward to `target`, wrapping if needed, and
    /// visit the field there. `receives_bonus` gates the pass-start bonus.
    pub fn move_player_to_field(&mut self, target: usize, receives_bonus: bool) {
        let position = self.current_field_index();
        let steps = if position <= target {
            target - position
        } else {
            self.game.board.len() - (position - target)
        };
        self.game.move_player(steps, receives_bonus);
    }

    /// Move the acting player straight to the suspension field.
    pub fn move_player_to_suspension_field(&mut self, receives_bonus: bool) {
        let target = self
            .game
            .board
            .suspension_index()
            .expect("board has no suspension field");
        self.move_player_to_field(target, receives_bonus);
    }

    fn transfer_to_bank(&mut self, amount: i64) {
        self.game.players[self.game.current].money -= amount;
        self.game.bank += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Horse, Trainer};
    use crate::core::{PlayerSpec, ScriptedDice};
    use crate::game::session::SessionBuilder;
    use crate::strategy::{BuyAll, BuyNothing};
    use std::sync::Arc;

    fn ladder() -> [i64; 6] {
        [40, 200, 600, 1_800, 3_200, 5_000]
    }

    fn test_board() -> Board {
        Board::new(vec![
            Field::Start,
            Field::Horse(Horse::new("A", 1_200, StableId(0), ladder(), 1_000)),
            Field::Horse(Horse::new("B", 1_200, StableId(0), ladder(), 1_000)),
            Field::Trainer(Trainer::new(1)),
            Field::Suspension,
            Field::ParkingLot,
            Field::ParkingLot,
        ])
    }

    fn session() -> GameSession {
        SessionBuilder::new()
            .board(test_board())
            .player(PlayerSpec::new("Ada", Arc::new(BuyAll)))
            .player(PlayerSpec::new("Bruno", Arc::new(BuyNothing)))
            .dice(Box::new(ScriptedDice::new([])))
            .build(0)
    }

    #[test]
    fn test_identity_queries() {
        let mut game = session();
        game.round = 3;
        let ctrl = Controller::new(&mut game);

        assert_eq!(ctrl.player_name(), "Ada");
        assert_eq!(ctrl.player_money(), 30_000);
        assert_eq!(ctrl.current_field_index(), 0);
        assert_eq!(ctrl.current_round(), 3);
    }

    #[test]
    fn test_affordability_is_inclusive() {
        let mut game = session();
        game.players[0].money = 1_200;
        let ctrl = Controller::new(&mut game);

        assert!(ctrl.has_enough_money(1_200));
        assert!(!ctrl.has_enough_money(1_201));
    }

    #[test]
    fn test_ownership_checks() {
        let mut game = session();
        game.players[0].position = 1;

        {
            let ctrl = Controller::new(&mut game);
            assert_eq!(ctrl.current_field_owner(), None);
            assert!(!ctrl.is_owned_by_player());
            assert!(!ctrl.is_owned_by_another_player());
            assert_eq!(ctrl.rival_owner(), None);
        }

        game.board.field_mut(1).set_owner(Some("Ada".to_owned()));
        {
            let ctrl = Controller::new(&mut game);
            assert!(ctrl.is_owned_by_player());
            assert!(!ctrl.is_owned_by_another_player());
            assert_eq!(ctrl.rival_owner(), None);
        }

        game.board.field_mut(1).set_owner(Some("Bruno".to_owned()));
        let ctrl = Controller::new(&mut game);
        assert!(!ctrl.is_owned_by_player());
        assert!(ctrl.is_owned_by_another_player());
        assert_eq!(ctrl.rival_owner(), Some("Bruno".to_owned()));
    }

    #[test]
    fn test_stable_ownership_queries() {
        let mut game = session();
        game.board.field_mut(1).set_owner(Some("Ada".to_owned()));

        {
            let ctrl = Controller::new(&mut game);
            assert_eq!(ctrl.horses_in_stable(StableId(0)), 2);
            assert_eq!(ctrl.horses_in_stable_owned_by(StableId(0), "Ada"), 1);
            assert!(!ctrl.is_whole_stable_owned_by(StableId(0), "Ada"));
        }

        game.board.field_mut(2).set_owner(Some("Ada".to_owned()));
        let ctrl = Controller::new(&mut game);
        assert!(ctrl.is_whole_stable_owned_by(StableId(0), "Ada"));
    }

    #[test]
    fn test_buy_property_transfers_and_assigns() {
        let mut game = session();
        game.players[0].position = 1;
        let bank_before = game.bank;

        Controller::new(&mut game).buy_property();

        assert_eq!(game.players[0].money, 30_000 - 1_200);
        assert_eq!(game.bank, bank_before + 1_200);
        assert_eq!(game.board.field(1).owner(), Some("Ada"));
    }

    #[test]
    fn test_buy_new_race_increments() {
        let mut game = session();
        game.players[0].position = 1;
        game.board.field_mut(1).set_owner(Some("Ada".to_owned()));
        let bank_before = game.bank;

        Controller::new(&mut game).buy_new_race();

        assert_eq!(game.board.field(1).as_horse().unwrap().races(), 1);
        assert_eq!(game.players[0].money, 30_000 - 1_000);
        assert_eq!(game.bank, bank_before + 1_000);
    }

    #[test]
    fn test_pay_admission_is_zero_sum() {
        let mut game = session();

        Controller::new(&mut game).pay_admission("Bruno", 600, "visiting A");

        assert_eq!(game.players[0].money, 30_000 - 600);
        assert_eq!(game.players[1].money, 30_000 + 600);
    }

    #[test]
    #[should_panic(expected = "is not active")]
    fn test_pay_admission_unknown_receiver_panics() {
        let mut game = session();
        Controller::new(&mut game).pay_admission("Nobody", 600, "visiting A");
    }

    #[test]
    fn test_suspend_and_query() {
        let mut game = session();

        Controller::new(&mut game).suspend_player();

        assert!(game.players[0].suspended);
        let ctrl = Controller::new(&mut game);
        assert!(ctrl.is_player_suspended("Ada"));
        assert!(!ctrl.is_player_suspended("Bruno"));
    }

    #[test]
    #[should_panic(expected = "no active player named")]
    fn test_suspension_query_unknown_name_panics() {
        let mut game = session();
        let _ = Controller::new(&mut game).is_player_suspended("Nobody");
    }

    #[test]
    fn test_move_to_field_behind_wraps_with_bonus() {
        let mut game = session();
        game.players[0].position = 5;

        // Target 1 lies behind position 5 on a 7-field board: 3 steps,
        // crossing Start.
        Controller::new(&mut game).move_player_to_field(1, true);

        assert_eq!(game.players[0].position, 1);
        assert_eq!(game.players[0].money, 30_000 + 4_000 - 1_200); // bonus, then bought A
    }

    #[test]
    fn test_move_to_suspension_suppresses_bonus() {
        let mut game = session();
        game.players[0].position = 5;
        let bank_before = game.bank;

        Controller::new(&mut game).move_player_to_suspension_field(false);

        assert_eq!(game.players[0].position, 4);
        assert!(game.players[0].suspended);
        assert_eq!(game.players[0].money, 30_000);
        // Only the suspension happened; no bonus left the bank.
        assert_eq!(game.bank, bank_before);
    }

    #[test]
    fn test_declined_purchase_still_counts_as_handled() {
        let mut game = SessionBuilder::new()
            .board(test_board())
            .player(PlayerSpec::new("Nix", Arc::new(BuyNothing)))
            .player(PlayerSpec::new("Ada", Arc::new(BuyAll)))
            .dice(Box::new(ScriptedDice::new([])))
            .build(0);
        game.players[0].position = 1;

        let field = game.board.field(1).clone();
        let handled = field.visit(&mut Controller::new(&mut game));

        // The declined offer ends the visit; nothing changed hands.
        assert!(handled);
        assert_eq!(game.board.field(1).owner(), None);
        assert_eq!(game.players[0].money, 30_000);
    }

    #[test]
    fn test_pay_fee_to_bank() {
        let mut game = session();
        let bank_before = game.bank;

        Controller::new(&mut game).pay_fee_to_bank(500, "a veterinary checkup");

        assert_eq!(game.players[0].money, 29_500);
        assert_eq!(game.bank, bank_before + 500);
    }
}
