mod debug;
mod default;
mod from;
mod from_iter;
mod into;
