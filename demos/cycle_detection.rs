use dsu::{base::DSURes, testing::cases::cycle_detection};

fn main() -> DSURes {
    println!("{}", cycle_detection()?);
    Ok(())
}
