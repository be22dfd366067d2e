mod article;
mod comment;
mod topic;
mod user;
