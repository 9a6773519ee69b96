use ecard_engine::cards::Role;
use ecard_engine::hand::Hand;
use ecard_engine::strategy::{CpuStrategy, UniformRandom};

#[test]
fn same_seed_produces_the_same_draw_sequence() {
    let hand = Hand::for_role(Role::Slave);
    let mut a = UniformRandom::new_with_seed(42);
    let mut b = UniformRandom::new_with_seed(42);
    for _ in 0..20 {
        assert_eq!(a.choose_card(&hand), b.choose_card(&hand));
    }
}

#[test]
fn different_seeds_eventually_diverge() {
    let hand = Hand::for_role(Role::Emperor);
    let mut a = UniformRandom::new_with_seed(1);
    let mut b = UniformRandom::new_with_seed(2);
    let diverged = (0..64).any(|_| a.choose_card(&hand) != b.choose_card(&hand));
    assert!(diverged, "64 identical draws from different seeds");
}

#[test]
fn chosen_card_is_always_in_the_hand() {
    let hand = Hand::for_role(Role::Emperor);
    let mut strategy = UniformRandom::new_with_seed(9);
    for _ in 0..50 {
        assert!(hand.contains(strategy.choose_card(&hand)));
    }
}

#[test]
fn strategy_reports_its_name() {
    let strategy = UniformRandom::new_with_seed(0);
    assert_eq!(strategy.name(), "uniform-random");
}
