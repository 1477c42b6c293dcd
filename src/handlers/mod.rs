pub mod graphql;
pub mod resolvers;
