// main.rs

fn main() -> anyhow::Result<()> {
    env_logger::init();
    calc_repl::repl::start_repl()
}
