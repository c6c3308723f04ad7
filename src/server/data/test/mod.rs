mod favorite;
mod maintenance;
mod review;
mod user;
