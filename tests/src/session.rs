mod failures;
mod scenarios;
