mod geocode_dto;
mod problem_dto;

pub use geocode_dto::{AddressResponseDto, ReverseGeocodeQuery};
pub use problem_dto::{
    CreateProblemDto, LikeResponseDto, ProblemListQuery, ProblemResponseDto,
};
