use dsu::{base::DSURes, testing::cases::component_sizes};

fn main() -> DSURes {
    println!("{}", component_sizes()?);
    Ok(())
}
