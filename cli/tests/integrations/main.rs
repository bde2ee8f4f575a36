mod interactive;
mod parse;
mod run;
