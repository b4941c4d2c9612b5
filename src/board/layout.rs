//! The standard board layout.
//!
//! Fixed configuration data: 22 horses across 8 stables, 4 trainers, 2
//! veterinary checkups, a parking lot and the suspension field. Admission
//! ladders rise with the stable's price bracket.

use super::field::{Field, Horse, StableId, Trainer};
use super::Board;

fn horse(name: &str, price: i64, stable: u8, admissions: [i64; 6], race_price: i64) -> Field {
    Field::Horse(Horse::new(name, price, StableId(stable), admissions, race_price))
}

/// The standard 31-field racing board.
pub(crate) fn standard_board() -> Board {
    Board::new(vec![
        Field::Start,
        horse("Fantome", 1_200, 0, [40, 200, 600, 1_800, 3_200, 5_000], 1_000),
        horse("Gavora", 1_200, 0, [40, 200, 600, 1_800, 3_200, 5_000], 1_000),
        Field::VeterinaryCheckup { fee: 500 },
        Field::Trainer(Trainer::new(1)),
        horse("Lady Anne", 2_000, 1, [120, 600, 1_800, 5_400, 8_000, 11_000], 1_000),
        horse("Pasek", 2_000, 1, [120, 600, 1_800, 5_400, 8_000, 11_000], 1_000),
        horse("Koran", 2_400, 1, [160, 800, 2_000, 6_000, 9_000, 12_000], 1_000),
        Field::Suspension,
        horse("Neklan", 2_800, 2, [200, 1_000, 3_000, 9_000, 12_500, 15_000], 2_000),
        horse("Portlancl", 2_800, 2, [200, 1_000, 3_000, 9_000, 12_500, 15_000], 2_000),
        horse("Japan", 2_800, 2, [240, 1_200, 3_600, 10_000, 14_000, 18_000], 2_000),
        Field::Trainer(Trainer::new(2)),
        horse("Kostrava", 3_600, 3, [280, 1_400, 4_000, 11_000, 15_000, 19_000], 2_000),
        horse("Lukava", 3_600, 3, [280, 1_400, 4_000, 11_000, 15_000, 19_000], 2_000),
        horse("Melak", 4_000, 3, [320, 1_600, 4_400, 12_000, 16_000, 20_000], 2_000),
        Field::ParkingLot,
        horse("Grifel", 4_400, 4, [360, 1_800, 5_000, 14_000, 17_000, 21_000], 3_000),
        horse("Mohyla", 4_400, 4, [360, 1_800, 5_000, 14_000, 17_000, 21_000], 3_000),
        horse("Metal", 4_800, 4, [400, 2_000, 6_000, 15_000, 18_000, 22_000], 3_000),
        Field::Trainer(Trainer::new(3)),
        horse("Tara", 5_200, 5, [440, 2_200, 6_600, 16_000, 19_500, 23_000], 3_000),
        horse("Furioso", 5_200, 5, [440, 2_200, 6_600, 16_000, 19_500, 23_000], 3_000),
        horse("Genius", 5_600, 5, [580, 2_400, 7_200, 17_000, 20_500, 24_000], 3_000),
        horse("Shagga", 6_000, 6, [500, 2_600, 7_800, 18_000, 22_000, 25_500], 4_000),
        horse("Dahoman", 6_000, 6, [500, 2_600, 7_800, 18_000, 22_000, 25_500], 4_000),
        horse("Gira", 6_400, 6, [560, 3_000, 9_000, 20_000, 24_000, 28_000], 4_000),
        Field::Trainer(Trainer::new(4)),
        horse("Narcius", 7_000, 7, [700, 3_500, 10_000, 22_000, 26_000, 30_000], 4_000),
        Field::VeterinaryCheckup { fee: 1_000 },
        horse("Napoli", 8_000, 7, [1_000, 4_000, 12_000, 28_000, 34_000, 40_000], 4_000),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board_shape() {
        let board = Board::standard();
        assert_eq!(board.len(), 31);
        assert_eq!(board.suspension_index(), Some(8));
        assert!(matches!(board.field(0), Field::Start));
        assert!(matches!(board.field(16), Field::ParkingLot));
    }

    #[test]
    fn test_standard_board_census() {
        let board = Board::standard();

        let horses = board.iter().filter(|f| f.as_horse().is_some()).count();
        let trainers = board.iter().filter(|f| f.as_trainer().is_some()).count();
        let checkups = board
            .iter()
            .filter(|f| matches!(f, Field::VeterinaryCheckup { .. }))
            .count();

        assert_eq!(horses, 22);
        assert_eq!(trainers, 4);
        assert_eq!(checkups, 2);
    }

    #[test]
    fn test_standard_stable_sizes() {
        let board = Board::standard();
        let expected = [2, 3, 3, 3, 3, 3, 3, 2];
        for (stable, &size) in expected.iter().enumerate() {
            assert_eq!(
                board.horses_in_stable(StableId(stable as u8)),
                size,
                "stable {stable}"
            );
        }
    }

    #[test]
    fn test_standard_board_starts_unowned() {
        let board = Board::standard();
        assert!(board.iter().all(|f| f.owner().is_none()));
        assert!(board
            .iter()
            .filter_map(Field::as_horse)
            .all(|h| h.races() == 0));
    }

    #[test]
    fn test_admission_ladders_are_increasing() {
        let board = Board::standard();
        for horse in board.iter().filter_map(Field::as_horse) {
            for pair in horse.admissions.windows(2) {
                assert!(pair[0] < pair[1], "{} ladder not increasing", horse.name);
            }
        }
    }
}
