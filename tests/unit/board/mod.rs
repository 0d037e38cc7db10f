mod candidates;
mod cell;
