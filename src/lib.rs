pub mod game;
pub mod games;
pub mod mcts;
pub mod perfect;

#[cfg(test)]
mod test;
