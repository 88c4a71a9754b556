use recbox::space::{S1, S64};
use recbox::RecBox;

fn main() {
    divan::main();
}

#[divan::bench]
fn recbox_small_item_small_space() {
    divan::black_box({
        let small: RecBox<_, S1> = RecBox::new(divan::black_box(true));
        small
    });
}

#[divan::bench]
fn recbox_small_item_large_space() {
    divan::black_box({
        let small: RecBox<_, S64> = RecBox::new(divan::black_box(true));
        small
    });
}

#[divan::bench]
fn recbox_large_item_small_space() {
    divan::black_box({
        let large: RecBox<_, S1> = RecBox::new(divan::black_box([0usize; 32]));
        large
    });
}

#[divan::bench]
fn recbox_large_item_large_space() {
    divan::black_box({
        let large: RecBox<_, S64> = RecBox::new(divan::black_box([0usize; 32]));
        large
    });
}

#[divan::bench]
fn box_small_item() {
    divan::black_box({
        let small: Box<_> = Box::new(divan::black_box(true));
        small
    });
}

#[divan::bench]
fn box_large_item() {
    divan::black_box({
        let large: Box<_> = Box::new(divan::black_box([0usize; 32]));
        large
    });
}
