mod member;
mod promotion;
