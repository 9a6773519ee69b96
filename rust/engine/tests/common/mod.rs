use ecard_engine::cards::CardKind;
use ecard_engine::hand::Hand;
use ecard_engine::strategy::CpuStrategy;
use std::collections::VecDeque;

/// Plays a fixed script of cards, for driving sessions to known states.
#[derive(Debug)]
pub struct Scripted {
    plays: VecDeque<CardKind>,
}

impl Scripted {
    pub fn new(plays: &[CardKind]) -> Box<Self> {
        Box::new(Self {
            plays: plays.iter().copied().collect(),
        })
    }
}

impl CpuStrategy for Scripted {
    fn choose_card(&mut self, hand: &Hand) -> CardKind {
        let card = self.plays.pop_front().expect("script exhausted");
        assert!(hand.contains(card), "script plays {} not in cpu hand", card);
        card
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
