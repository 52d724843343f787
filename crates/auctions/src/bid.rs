//! Bid value object.

use serde::{Deserialize, Serialize};

use vams_core::{Amount, ValueObject};

use crate::error::{AuctionError, AuctionResult};

/// A single accepted bid on an auctioned vehicle.
///
/// Bids carry no timestamp; their position in the vehicle's bid list is the
/// submission order. A `Bid` can only be constructed through [`Bid::place`],
/// so an instance always satisfies the bid ladder rules relative to the
/// bids that preceded it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    amount: Amount,
}

impl Bid {
    /// Validate `amount` against the vehicle's starting bid and its existing
    /// bid list, in this exact order:
    ///
    /// 1. negative amounts are rejected;
    /// 2. the opening bid must reach the starting bid (equality allowed);
    /// 3. every later bid must strictly exceed the current highest bid
    ///    (ties rejected).
    pub fn place(amount: Amount, starting_bid: Amount, existing: &[Bid]) -> AuctionResult<Self> {
        if amount.is_negative() {
            return Err(AuctionError::NegativeBid(amount));
        }

        match existing.iter().map(|bid| bid.amount).max() {
            None => {
                if amount < starting_bid {
                    return Err(AuctionError::BelowStartingBid {
                        amount,
                        starting_bid,
                    });
                }
            }
            Some(highest) => {
                if amount <= highest {
                    return Err(AuctionError::BidTooLow { amount, highest });
                }
            }
        }

        Ok(Self { amount })
    }

    pub fn amount(self) -> Amount {
        self.amount
    }
}

impl ValueObject for Bid {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn amount(value: i64) -> Amount {
        Amount::from(value)
    }

    #[test]
    fn negative_amounts_are_rejected_first() {
        let err = Bid::place(Amount::new(dec!(-0.01)), amount(100), &[]).unwrap_err();
        assert!(matches!(err, AuctionError::NegativeBid(_)));
    }

    #[test]
    fn opening_bid_may_equal_the_starting_bid() {
        let bid = Bid::place(amount(1000), amount(1000), &[]).unwrap();
        assert_eq!(bid.amount(), amount(1000));
    }

    #[test]
    fn opening_bid_below_the_starting_bid_is_rejected() {
        let err = Bid::place(amount(999), amount(1000), &[]).unwrap_err();
        assert!(matches!(err, AuctionError::BelowStartingBid { .. }));
    }

    #[test]
    fn later_bids_must_strictly_exceed_the_highest() {
        let first = Bid::place(amount(1000), amount(1000), &[]).unwrap();
        let ladder = vec![first];

        let err = Bid::place(amount(1000), amount(1000), &ladder).unwrap_err();
        assert_eq!(
            err,
            AuctionError::BidTooLow {
                amount: amount(1000),
                highest: amount(1000),
            }
        );

        let second = Bid::place(amount(1001), amount(1000), &ladder).unwrap();
        assert_eq!(second.amount(), amount(1001));
    }

    proptest! {
        /// For any submission sequence, the accepted bids form a strictly
        /// increasing ladder and rejections leave the ladder untouched.
        #[test]
        fn accepted_bids_are_strictly_increasing(amounts in prop::collection::vec(0i64..10_000, 1..40)) {
            let starting_bid = amount(500);
            let mut ladder: Vec<Bid> = Vec::new();

            for submitted in amounts {
                let before = ladder.clone();
                match Bid::place(amount(submitted), starting_bid, &ladder) {
                    Ok(bid) => ladder.push(bid),
                    Err(_) => prop_assert_eq!(&ladder, &before),
                }
            }

            for pair in ladder.windows(2) {
                prop_assert!(pair[0].amount() < pair[1].amount());
            }
            if let Some(first) = ladder.first() {
                prop_assert!(first.amount() >= starting_bid);
            }
        }
    }
}
