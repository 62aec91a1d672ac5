#[macro_use]
mod utils;
mod operations;

pub use libtest_mimic::{Failed, Trial};
pub use utils::*;

use libtest_mimic::Arguments;

fn main() {
    let args = Arguments::from_args();

    let mut tests = Vec::new();
    operations::cancel::tests(&mut tests);
    operations::rename::tests(&mut tests);
    operations::failure::tests(&mut tests);

    libtest_mimic::run(&args, tests).exit();
}
