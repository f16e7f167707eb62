//! Image tools. These run entirely in the browser; the server only serves their pages.

use crate::catalog::types::ToolDescriptor;

pub fn media_tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            id: "image-compressor",
            name: "Image Compressor",
            description: "Shrink PNG, JPEG and WebP files without uploading them anywhere.",
            category: "image",
            path: "/tools/image-compressor",
        },
        ToolDescriptor {
            id: "image-resizer",
            name: "Image Resizer",
            description: "Resize images to exact dimensions or by percentage.",
            category: "image",
            path: "/tools/image-resizer",
        },
        ToolDescriptor {
            id: "image-to-base64",
            name: "Image to Base64",
            description: "Turn an image file into a Base64 data URI ready to paste into CSS or HTML.",
            category: "image",
            path: "/tools/image-to-base64",
        },
        ToolDescriptor {
            id: "favicon-generator",
            name: "Favicon Generator",
            description: "Create a full favicon set from a single square image.",
            category: "image",
            path: "/tools/favicon-generator",
        },
    ]
}
