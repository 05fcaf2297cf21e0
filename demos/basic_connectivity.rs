use dsu::{base::DSURes, testing::cases::basic_connectivity};

fn main() -> DSURes {
    println!("{}", basic_connectivity()?);
    Ok(())
}
