mod amend;
mod compose;
mod hook;
mod shortcuts;
