mod access_decision;
mod role;
