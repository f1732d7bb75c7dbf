mod admin_dtos;

pub use admin_dtos::{
    AdminUserDto, CategoryCountDto, DeleteResponseDto, ProblemStatsDto, StatusCountDto,
    UpdateProblemStatusDto,
};
