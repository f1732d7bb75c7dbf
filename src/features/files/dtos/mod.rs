mod file_dto;

pub use file_dto::{
    extension_for_content_type, is_image_type_allowed, DeleteImageDto, DeleteImageResponseDto,
    ImageResponseDto, UploadImageDto, ALLOWED_IMAGE_TYPES, MAX_IMAGE_SIZE,
};
